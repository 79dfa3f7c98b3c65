use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::ports::medical_record_repository::MedicalRecordRepository;
use crate::application::ports::patient_data::PatientDataError;
use crate::domain::records::medical_record::MedicalRecord;
use crate::infrastructure::db::PgPool;
use crate::infrastructure::db::repositories::{ensure_user_exists, storage};

pub struct SqlxMedicalRecordRepository {
    pub pool: PgPool,
}

impl SqlxMedicalRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn record_row(r: &PgRow) -> MedicalRecord {
    MedicalRecord {
        date: r.get("record_date"),
        record_type: r.get("record_type"),
        description: r.get("description"),
        doctor: r.get("doctor"),
    }
}

#[async_trait]
impl MedicalRecordRepository for SqlxMedicalRecordRepository {
    async fn append(
        &self,
        email: &str,
        record: &MedicalRecord,
    ) -> Result<MedicalRecord, PatientDataError> {
        // Single statement: the row is only produced when the owner exists.
        let row = sqlx::query(
            r#"INSERT INTO medical_records (user_email, record_date, record_type, description, doctor)
               SELECT u.email, $2, $3, $4, $5 FROM users u WHERE u.email = $1
               RETURNING record_date, record_type, description, doctor"#,
        )
        .bind(email)
        .bind(&record.date)
        .bind(&record.record_type)
        .bind(&record.description)
        .bind(&record.doctor)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage)?;
        row.as_ref()
            .map(record_row)
            .ok_or(PatientDataError::UserNotFound)
    }

    async fn list_for(
        &self,
        email: &str,
    ) -> Result<Vec<MedicalRecord>, PatientDataError> {
        ensure_user_exists(&self.pool, email).await?;
        let rows = sqlx::query(
            r#"SELECT record_date, record_type, description, doctor
               FROM medical_records
               WHERE user_email = $1
               ORDER BY id ASC"#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await
        .map_err(storage)?;
        Ok(rows.iter().map(record_row).collect())
    }
}
