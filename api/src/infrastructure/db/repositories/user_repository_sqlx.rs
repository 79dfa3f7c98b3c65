use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::ports::user_repository::{UserRepository, UserRepositoryError, UserRow};
use crate::infrastructure::db::PgPool;

pub struct SqlxUserRepository {
    pub pool: PgPool,
}

impl SqlxUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn user_row(r: &PgRow) -> UserRow {
    UserRow {
        email: r.get("email"),
        name: r.get("name"),
        phone: r.get("phone"),
        password_hash: r.get("password_hash"),
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn create_user(
        &self,
        email: &str,
        name: &str,
        password_hash: &str,
        phone: &str,
    ) -> Result<UserRow, UserRepositoryError> {
        // The primary key on email arbitrates concurrent signups.
        let row = sqlx::query(
            r#"INSERT INTO users (email, name, password_hash, phone) VALUES ($1, $2, $3, $4)
               RETURNING email, name, password_hash, phone"#,
        )
        .bind(email)
        .bind(name)
        .bind(password_hash)
        .bind(phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db) if db.is_unique_violation() => UserRepositoryError::AlreadyExists,
            _ => UserRepositoryError::Storage(e.into()),
        })?;
        Ok(user_row(&row))
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<UserRow>> {
        let row = sqlx::query(
            r#"SELECT email, name, password_hash, phone FROM users WHERE email = $1"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(user_row))
    }

    async fn ping(&self) -> anyhow::Result<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }
}
