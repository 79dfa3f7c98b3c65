use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::ports::admission_repository::AdmissionRepository;
use crate::application::ports::patient_data::PatientDataError;
use crate::domain::admissions::admission::Admission;
use crate::infrastructure::db::PgPool;
use crate::infrastructure::db::repositories::{ensure_user_exists, storage};

pub struct SqlxAdmissionRepository {
    pub pool: PgPool,
}

impl SqlxAdmissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn admission_row(r: &PgRow) -> Admission {
    Admission {
        room_number: r.get("room_number"),
        admission_date: r.get("admission_date"),
        discharge_date: r.get("discharge_date"),
        status: r.get("status"),
        notes: r.get("notes"),
        created_at: r.get("created_at"),
    }
}

#[async_trait]
impl AdmissionRepository for SqlxAdmissionRepository {
    async fn append_admission(
        &self,
        email: &str,
        a: &Admission,
    ) -> Result<Admission, PatientDataError> {
        let row = sqlx::query(
            r#"INSERT INTO admissions (user_email, room_number, admission_date, discharge_date, status, notes, created_at)
               SELECT u.email, $2, $3, $4, $5, $6, $7 FROM users u WHERE u.email = $1
               RETURNING room_number, admission_date, discharge_date, status, notes, created_at"#,
        )
        .bind(email)
        .bind(&a.room_number)
        .bind(&a.admission_date)
        .bind(&a.discharge_date)
        .bind(&a.status)
        .bind(&a.notes)
        .bind(a.created_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage)?;
        row.as_ref()
            .map(admission_row)
            .ok_or(PatientDataError::UserNotFound)
    }

    async fn list_admissions(&self, email: &str) -> Result<Vec<Admission>, PatientDataError> {
        ensure_user_exists(&self.pool, email).await?;
        let rows = sqlx::query(
            r#"SELECT room_number, admission_date, discharge_date, status, notes, created_at
               FROM admissions
               WHERE user_email = $1
               ORDER BY id ASC"#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await
        .map_err(storage)?;
        Ok(rows.iter().map(admission_row).collect())
    }
}
