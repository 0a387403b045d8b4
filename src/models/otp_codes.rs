use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Latest code issued for an identity key. Reissuing overwrites it.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct OtpRecord {
    #[sqlx(rename = "email")]
    pub key: String,
    pub code: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub used: bool,
}

impl OtpRecord {
    pub fn new(
        key: impl Into<String>,
        code: impl Into<String>,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            key: key.into(),
            code: code.into(),
            issued_at,
            expires_at: issued_at + ttl,
            used: false,
        }
    }

    /// A record stays valid up to and including `expires_at`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }
}

/// Result of issuing a code. The code itself only leaves the service for
/// delivery and for tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuedCode {
    pub code: String,
    #[serde(rename = "expiresAt")]
    pub expires_at: DateTime<Utc>,
}
