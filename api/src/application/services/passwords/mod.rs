use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use once_cell::sync::Lazy;
use password_hash::rand_core::OsRng;

/// Hash of a throwaway secret, checked when a login names an unknown user so
/// that path costs one argon2 verification like every other.
static DUMMY_HASH: Lazy<Option<String>> = Lazy::new(|| match hash_password("dummy-login-secret") {
    Ok(hash) => Some(hash),
    Err(e) => {
        tracing::error!(error = ?e, "dummy_hash_unavailable");
        None
    }
});

/// Salted argon2 hash in PHC string form.
pub fn hash_password(plaintext: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .to_string();
    Ok(hash)
}

/// Constant-time check of `plaintext` against a stored PHC string.
pub fn verify_password(plaintext: &str, stored_hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| anyhow::anyhow!(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok())
}

/// Runs a full verification against [`DUMMY_HASH`]; always `Ok(false)` unless
/// hashing itself is broken.
pub fn verify_against_dummy(plaintext: &str) -> anyhow::Result<bool> {
    let hash = DUMMY_HASH
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("dummy password hash unavailable"))?;
    verify_password(plaintext, hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_salted_and_verifiable() {
        let a = hash_password("s3cret").unwrap();
        let b = hash_password("s3cret").unwrap();
        assert_ne!(a, b);
        assert!(!a.contains("s3cret"));
        assert!(verify_password("s3cret", &a).unwrap());
        assert!(!verify_password("S3cret", &a).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("x", "plaintext-password").is_err());
    }

    #[test]
    fn dummy_verification_never_matches() {
        assert!(!verify_against_dummy("p").unwrap());
        assert!(!verify_against_dummy("").unwrap());
        assert!(DUMMY_HASH.as_deref().unwrap().starts_with("$argon2"));
    }
}
