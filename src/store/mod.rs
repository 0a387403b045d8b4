//! Persistence seam for OTP records.
//!
//! The service only ever talks to an [`OtpStore`]; the backend is injected at
//! startup so tests can run against [`MemoryOtpStore`].

mod memory;
mod postgres;

pub use memory::MemoryOtpStore;
pub use postgres::PgOtpStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::otp_codes::OtpRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    RecordNotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait OtpStore: Send + Sync {
    /// Upsert the record for `record.key`, replacing whatever was there.
    async fn save(&self, record: &OtpRecord) -> Result<(), StoreError>;

    async fn get(&self, key: &str) -> Result<Option<OtpRecord>, StoreError>;

    /// Flip `used` to true in a single conditional step.
    ///
    /// Succeeds only if the record for `key` still carries `code`, is unused
    /// and has not expired at `now`. Otherwise fails with
    /// [`StoreError::RecordNotFound`] and leaves the record untouched.
    async fn mark_used(
        &self,
        key: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<(), StoreError>;
}
