use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::{OtpStore, StoreError};
use crate::models::otp_codes::OtpRecord;

/// Process-local store. Records are lost on restart and are not shared
/// between replicas.
#[derive(Debug, Default)]
pub struct MemoryOtpStore {
    records: Mutex<HashMap<String, OtpRecord>>,
}

impl MemoryOtpStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn records(&self) -> Result<MutexGuard<'_, HashMap<String, OtpRecord>>, StoreError> {
        self.records
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl OtpStore for MemoryOtpStore {
    async fn save(&self, record: &OtpRecord) -> Result<(), StoreError> {
        self.records()?.insert(record.key.clone(), record.clone());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<OtpRecord>, StoreError> {
        Ok(self.records()?.get(key).cloned())
    }

    async fn mark_used(
        &self,
        key: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let mut records = self.records()?;
        match records.get_mut(key) {
            Some(record) if !record.used && record.code == code && !record.is_expired(now) => {
                record.used = true;
                Ok(())
            }
            _ => Err(StoreError::RecordNotFound),
        }
    }
}
