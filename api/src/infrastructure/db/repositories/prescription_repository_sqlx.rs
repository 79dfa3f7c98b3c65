use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::ports::patient_data::PatientDataError;
use crate::application::ports::prescription_repository::PrescriptionRepository;
use crate::domain::prescriptions::prescription::Prescription;
use crate::infrastructure::db::PgPool;
use crate::infrastructure::db::repositories::{ensure_user_exists, storage};

pub struct SqlxPrescriptionRepository {
    pub pool: PgPool,
}

impl SqlxPrescriptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn prescription_row(r: &PgRow) -> Prescription {
    Prescription {
        medication_name: r.get("medication_name"),
        dosage: r.get("dosage"),
        frequency: r.get("frequency"),
        duration: r.get("duration"),
        status: r.get("status"),
        notes: r.get("notes"),
        created_at: r.get("created_at"),
    }
}

#[async_trait]
impl PrescriptionRepository for SqlxPrescriptionRepository {
    async fn append_prescription(
        &self,
        email: &str,
        p: &Prescription,
    ) -> Result<Prescription, PatientDataError> {
        let row = sqlx::query(
            r#"INSERT INTO prescriptions (user_email, medication_name, dosage, frequency, duration, status, notes, created_at)
               SELECT u.email, $2, $3, $4, $5, $6, $7, $8 FROM users u WHERE u.email = $1
               RETURNING medication_name, dosage, frequency, duration, status, notes, created_at"#,
        )
        .bind(email)
        .bind(&p.medication_name)
        .bind(&p.dosage)
        .bind(&p.frequency)
        .bind(&p.duration)
        .bind(&p.status)
        .bind(&p.notes)
        .bind(p.created_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage)?;
        row.as_ref()
            .map(prescription_row)
            .ok_or(PatientDataError::UserNotFound)
    }

    async fn list_prescriptions(&self, email: &str) -> Result<Vec<Prescription>, PatientDataError> {
        ensure_user_exists(&self.pool, email).await?;
        let rows = sqlx::query(
            r#"SELECT medication_name, dosage, frequency, duration, status, notes, created_at
               FROM prescriptions
               WHERE user_email = $1
               ORDER BY id ASC"#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await
        .map_err(storage)?;
        Ok(rows.iter().map(prescription_row).collect())
    }
}
