use std::env;

use anyhow::Context;

const DEFAULT_API_PORT: u16 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Postgres,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub api_port: u16,
    pub database_url: Option<String>,
    pub store_backend: StoreBackend,
    pub static_dir: String,
    pub is_production: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_port = parse_port(env::var("API_PORT").or_else(|_| env::var("PORT")).ok())?;
        let database_url = env::var("DATABASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty());
        let store_backend = match env::var("STORE_BACKEND").ok().as_deref() {
            Some("memory") => StoreBackend::Memory,
            Some("postgres") | Some("pg") => StoreBackend::Postgres,
            Some(other) => anyhow::bail!("unknown STORE_BACKEND `{other}` (memory|postgres)"),
            None if database_url.is_some() => StoreBackend::Postgres,
            None => StoreBackend::Memory,
        };
        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "./public".into());
        let is_production = matches!(
            env::var("RUST_ENV").ok().as_deref(),
            Some("production") | Some("prod")
        );

        if store_backend == StoreBackend::Postgres && database_url.is_none() {
            anyhow::bail!("DATABASE_URL must be set when STORE_BACKEND=postgres");
        }
        // In-memory users and records vanish on restart
        if is_production && store_backend == StoreBackend::Memory {
            anyhow::bail!("the memory store backend is not allowed in production; set DATABASE_URL");
        }

        Ok(Self {
            api_port,
            database_url,
            store_backend,
            static_dir,
            is_production,
        })
    }

    /// Settings for router tests and local tooling: memory store, no database.
    pub fn in_memory(static_dir: impl Into<String>) -> Self {
        Self {
            api_port: 0,
            database_url: None,
            store_backend: StoreBackend::Memory,
            static_dir: static_dir.into(),
            is_production: false,
        }
    }
}

/// Unset means the default; a value that is set must be a valid port.
fn parse_port(raw: Option<String>) -> anyhow::Result<u16> {
    match raw {
        None => Ok(DEFAULT_API_PORT),
        Some(v) => v
            .trim()
            .parse()
            .with_context(|| format!("API_PORT/PORT must be a port number, got `{v}`")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_port_uses_default() {
        assert_eq!(parse_port(None).unwrap(), 3000);
    }

    #[test]
    fn explicit_port_is_used() {
        assert_eq!(parse_port(Some("8080".into())).unwrap(), 8080);
    }

    #[test]
    fn invalid_port_is_rejected() {
        for bad in ["", "abc", "70000", "-1"] {
            let err = parse_port(Some(bad.into())).unwrap_err();
            assert!(err.to_string().contains("API_PORT"), "{bad}: {err}");
        }
    }
}
