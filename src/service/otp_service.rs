use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{error, info, instrument, warn};

use crate::config::config::{ConfigError, OtpConfig};
use crate::config::crypto::OtpGenerator;
use crate::error::OtpError;
use crate::models::otp_codes::{IssuedCode, OtpRecord};
use crate::service::email_service::EmailService;
use crate::store::{OtpStore, StoreError};
use crate::utils::clock::Clock;
use crate::utils::normalize::{normalize_code, normalize_key};

pub struct OtpService {
    store: Arc<dyn OtpStore>,
    email_service: Arc<EmailService>,
    clock: Arc<dyn Clock>,
    generator: OtpGenerator,
    ttl: Duration,
}

impl OtpService {
    pub fn new(
        store: Arc<dyn OtpStore>,
        email_service: Arc<EmailService>,
        clock: Arc<dyn Clock>,
        config: OtpConfig,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            store,
            email_service,
            clock,
            generator: OtpGenerator::new(config.code_length)?,
            ttl: config.ttl()?,
        })
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Generate and persist a fresh code, replacing any earlier one for the
    /// same key. Nothing is delivered.
    #[instrument(skip(self))]
    pub async fn issue_code(&self, identity_key: &str) -> Result<IssuedCode, OtpError> {
        let key = normalize_key(identity_key);
        let code = self.generator.generate_otp_code();
        let record = OtpRecord::new(key, code, self.clock.now(), self.ttl);

        self.store.save(&record).await.map_err(|e| {
            error!(error = %e, "Failed to save OTP record");
            OtpError::StoreUnavailable
        })?;

        info!(expires_at = %record.expires_at, "OTP issued");
        Ok(IssuedCode {
            code: record.code,
            expires_at: record.expires_at,
        })
    }

    /// Issue a code and email it to the identity key. Returns when it expires.
    #[instrument(skip(self))]
    pub async fn send_code(&self, identity_key: &str) -> Result<DateTime<Utc>, OtpError> {
        let key = normalize_key(identity_key);
        let issued = self.issue_code(&key).await?;

        self.email_service
            .send_verification(&key, &issued.code, self.ttl_minutes())
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to deliver OTP email");
                OtpError::DeliveryFailed
            })?;

        Ok(issued.expires_at)
    }

    pub async fn check_code(&self, identity_key: &str, submitted: &str) -> Result<(), OtpError> {
        self.check_code_at(identity_key, submitted, self.clock.now()).await
    }

    /// Validate `submitted` against the stored record as of `now` and, when
    /// it passes, consume the record.
    #[instrument(skip(self, submitted))]
    pub async fn check_code_at(
        &self,
        identity_key: &str,
        submitted: &str,
        now: DateTime<Utc>,
    ) -> Result<(), OtpError> {
        let key = normalize_key(identity_key);
        let submitted = normalize_code(submitted);

        let record = self.fetch(&key).await?;
        classify(record.as_ref(), submitted, now)?;

        match self.store.mark_used(&key, submitted, now).await {
            Ok(()) => {
                info!("OTP verified");
                Ok(())
            }
            Err(StoreError::RecordNotFound) => {
                // Someone else consumed or replaced the record between our read and write.
                warn!("OTP record changed during verification");
                let record = self.fetch(&key).await?;
                classify(record.as_ref(), submitted, now)?;
                Err(OtpError::CodeAlreadyUsed)
            }
            Err(e) => {
                error!(error = %e, "Failed to mark OTP as used");
                Err(OtpError::StoreUnavailable)
            }
        }
    }

    async fn fetch(&self, key: &str) -> Result<Option<OtpRecord>, OtpError> {
        self.store.get(key).await.map_err(|e| {
            error!(error = %e, "Failed to fetch OTP record");
            OtpError::StoreUnavailable
        })
    }

    fn ttl_minutes(&self) -> i64 {
        (self.ttl.num_seconds() + 59) / 60
    }
}

/// First failing check wins: missing, expired, used, wrong code.
fn classify(
    record: Option<&OtpRecord>,
    submitted: &str,
    now: DateTime<Utc>,
) -> Result<(), OtpError> {
    let record = record.ok_or(OtpError::CodeNotFound)?;

    if record.is_expired(now) {
        return Err(OtpError::CodeExpired);
    }
    if record.used {
        return Err(OtpError::CodeAlreadyUsed);
    }
    if record.code != submitted {
        return Err(OtpError::CodeIncorrect);
    }
    Ok(())
}
