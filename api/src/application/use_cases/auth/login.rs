use crate::application::ports::user_repository::UserRepository;
use crate::application::services::passwords;
use crate::application::services::validation::present;
use crate::domain::users::user::User;

pub struct Login<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone, Default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// `NotFound` and `InvalidPassword` are kept apart here for server-side
/// diagnostics; the HTTP layer reports both as the same 401.
#[derive(thiserror::Error, Debug)]
pub enum LoginError {
    #[error("Email and password are required")]
    MissingFields,
    #[error("user not found")]
    NotFound,
    #[error("invalid password")]
    InvalidPassword,
    #[error("failed to verify credentials")]
    Internal(#[source] anyhow::Error),
}

impl<'a, R: UserRepository + ?Sized> Login<'a, R> {
    pub async fn execute(&self, req: &LoginRequest) -> Result<User, LoginError> {
        let (Some(email), Some(password)) = (
            present(&req.email),
            present(&req.password),
        ) else {
            return Err(LoginError::MissingFields);
        };
        self.verify_credentials(email, password).await
    }

    pub async fn verify_credentials(&self, email: &str, password: &str) -> Result<User, LoginError> {
        let row = self
            .repo
            .find_by_email(email)
            .await
            .map_err(LoginError::Internal)?;
        // Unknown emails still pay for one argon2 verification.
        let matches = match &row {
            Some(row) => passwords::verify_password(password, &row.password_hash),
            None => passwords::verify_against_dummy(password),
        }
        .map_err(LoginError::Internal)?;
        match row {
            Some(row) if matches => Ok(row.into()),
            Some(_) => Err(LoginError::InvalidPassword),
            None => Err(LoginError::NotFound),
        }
    }
}
