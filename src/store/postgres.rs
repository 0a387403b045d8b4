use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{info, instrument};

use super::{OtpStore, StoreError};
use crate::models::otp_codes::OtpRecord;

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

pub struct PgOtpStore {
    pool: PgPool,
}

impl PgOtpStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn migrate(&self) -> Result<(), StoreError> {
        info!("Running otp_codes migrations");
        MIGRATOR
            .run(&self.pool)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

fn unavailable(err: sqlx::Error) -> StoreError {
    StoreError::Unavailable(err.to_string())
}

#[async_trait]
impl OtpStore for PgOtpStore {
    #[instrument(skip(self, record), fields(key = %record.key))]
    async fn save(&self, record: &OtpRecord) -> Result<(), StoreError> {
        sqlx::query(
            r#"
                INSERT INTO otp_codes (email, code, issued_at, expires_at, used)
                VALUES ($1, $2, $3, $4, false)
                ON CONFLICT (email)
                DO UPDATE SET
                    code = EXCLUDED.code,
                    issued_at = EXCLUDED.issued_at,
                    expires_at = EXCLUDED.expires_at,
                    used = false
            "#,
        )
        .bind(&record.key)
        .bind(&record.code)
        .bind(record.issued_at)
        .bind(record.expires_at)
        .execute(&self.pool)
        .await
        .map_err(unavailable)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<OtpRecord>, StoreError> {
        sqlx::query_as::<_, OtpRecord>(
            r#"
                SELECT email, code, issued_at, expires_at, used
                FROM otp_codes
                WHERE email = $1
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(unavailable)
    }

    #[instrument(skip(self, code))]
    async fn mark_used(
        &self,
        key: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
                UPDATE otp_codes
                SET used = true
                WHERE email = $1
                  AND code = $2
                  AND used = false
                  AND expires_at >= $3
            "#,
        )
        .bind(key)
        .bind(code)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(unavailable)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::RecordNotFound);
        }
        Ok(())
    }
}
