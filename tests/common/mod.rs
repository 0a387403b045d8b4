#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use findspot_otp::service::email_service::{EmailError, EmailProvider, EmailService, OutgoingEmail};
use findspot_otp::store::{MemoryOtpStore, OtpStore, StoreError};
use findspot_otp::utils::clock::ManualClock;
use findspot_otp::{OtpConfig, OtpRecord, OtpService};

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 10, 9, 0, 0).unwrap()
}

pub type Outbox = Arc<Mutex<Vec<OutgoingEmail>>>;

pub struct RecordingProvider(pub Outbox);

#[async_trait]
impl EmailProvider for RecordingProvider {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError> {
        self.0.lock().unwrap().push(email.clone());
        Ok(())
    }
}

pub struct FailingProvider;

#[async_trait]
impl EmailProvider for FailingProvider {
    async fn send(&self, _email: &OutgoingEmail) -> Result<(), EmailError> {
        Err(EmailError::SendFailed("smtp: 421 service not available".to_string()))
    }
}

/// Store whose backend is down.
pub struct FailingStore;

#[async_trait]
impl OtpStore for FailingStore {
    async fn save(&self, _record: &OtpRecord) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn get(&self, _key: &str) -> Result<Option<OtpRecord>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn mark_used(
        &self,
        _key: &str,
        _code: &str,
        _now: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

pub struct Harness {
    pub service: Arc<OtpService>,
    pub store: Arc<MemoryOtpStore>,
    pub clock: Arc<ManualClock>,
    pub outbox: Outbox,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(OtpConfig::default())
    }

    pub fn with_config(config: OtpConfig) -> Self {
        let store = Arc::new(MemoryOtpStore::new());
        let clock = Arc::new(ManualClock::new(t0()));
        let outbox: Outbox = Arc::new(Mutex::new(Vec::new()));
        let email = EmailService::with_provider(
            Box::new(RecordingProvider(outbox.clone())),
            "noreply@findspot.app",
            Some("FindSpot"),
            "FindSpot",
        );

        let service = OtpService::new(store.clone(), Arc::new(email), clock.clone(), config)
            .expect("valid OTP config");

        Self {
            service: Arc::new(service),
            store,
            clock,
            outbox,
        }
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.outbox.lock().unwrap().clone()
    }
}

pub fn service_with(store: Arc<dyn OtpStore>, provider: Box<dyn EmailProvider>) -> OtpService {
    let email = EmailService::with_provider(provider, "noreply@findspot.app", None, "FindSpot");
    OtpService::new(
        store,
        Arc::new(email),
        Arc::new(ManualClock::new(t0())),
        OtpConfig::default(),
    )
    .expect("valid OTP config")
}
