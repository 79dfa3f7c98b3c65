use crate::application::ports::user_repository::{UserRepository, UserRepositoryError};
use crate::application::services::passwords;
use crate::application::services::validation::{is_valid_email, present};
use crate::domain::users::user::User;

pub struct Register<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone, Default)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum RegisterError {
    #[error("All fields are required")]
    MissingFields,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Email already registered")]
    AlreadyExists,
    #[error("failed to register user")]
    Internal(#[source] anyhow::Error),
}

impl<'a, R: UserRepository + ?Sized> Register<'a, R> {
    pub async fn execute(&self, req: &RegisterRequest) -> Result<User, RegisterError> {
        let (Some(email), Some(name), Some(password), Some(phone)) = (
            present(&req.email),
            present(&req.name),
            present(&req.password),
            present(&req.phone),
        ) else {
            return Err(RegisterError::MissingFields);
        };
        if !is_valid_email(email) {
            return Err(RegisterError::InvalidEmail);
        }

        let hash = passwords::hash_password(password).map_err(RegisterError::Internal)?;
        let row = self
            .repo
            .create_user(email, name, &hash, phone)
            .await
            .map_err(|e| match e {
                UserRepositoryError::AlreadyExists => RegisterError::AlreadyExists,
                UserRepositoryError::Storage(err) => RegisterError::Internal(err),
            })?;
        Ok(row.into())
    }
}
