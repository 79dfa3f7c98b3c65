use async_trait::async_trait;

use crate::domain::users::user::User;

#[derive(Debug, Clone)]
pub struct UserRow {
    pub email: String,
    pub name: String,
    pub phone: String,
    pub password_hash: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            email: row.email,
            name: row.name,
            phone: row.phone,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum UserRepositoryError {
    #[error("user already exists")]
    AlreadyExists,
    #[error("user store failure")]
    Storage(#[source] anyhow::Error),
}

/// Users keyed by email (exact, case-sensitive match). No update or delete.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Must rely on the backend's atomic uniqueness so that concurrent
    /// signups for one email cannot both succeed.
    async fn create_user(
        &self,
        email: &str,
        name: &str,
        password_hash: &str,
        phone: &str,
    ) -> Result<UserRow, UserRepositoryError>;
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<UserRow>>;
    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
