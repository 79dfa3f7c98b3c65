use crate::application::ports::patient_data::PatientDataError;
use crate::infrastructure::db::PgPool;

pub mod admission_repository_sqlx;
pub mod medical_record_repository_sqlx;
pub mod prescription_repository_sqlx;
pub mod user_repository_sqlx;

pub(crate) fn storage(e: sqlx::Error) -> PatientDataError {
    PatientDataError::Storage(e.into())
}

/// Listing needs an explicit check: an empty result alone cannot tell an
/// unknown owner from one with no rows.
pub(crate) async fn ensure_user_exists(pool: &PgPool, email: &str) -> Result<(), PatientDataError> {
    let exists: bool = sqlx::query_scalar(r#"SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)"#)
        .bind(email)
        .fetch_one(pool)
        .await
        .map_err(storage)?;
    if exists {
        Ok(())
    } else {
        Err(PatientDataError::UserNotFound)
    }
}
