use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::models::settings::TrackerConfig;
use super::traits::KeyValueStore;

/// Stored form of a login session: expiry as milliseconds since the epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub expiry: i64,
}

/// Client-side half of the password gate: remembers a successful login for
/// a fixed duration. The password check itself happens elsewhere.
#[derive(Debug, Clone)]
pub struct SessionGate {
    key: String,
    duration: Duration,
}

impl SessionGate {
    pub fn new(key: impl Into<String>, duration: Duration) -> Self {
        Self {
            key: key.into(),
            duration,
        }
    }

    /// Gate using the configured session key and duration.
    pub fn from_config(config: &TrackerConfig) -> Result<Self, CoreError> {
        let duration = Duration::try_minutes(config.session_duration_minutes)
            .filter(|d| *d > Duration::zero())
            .ok_or_else(|| {
                CoreError::ValidationError(format!(
                    "session_duration_minutes out of range: {}",
                    config.session_duration_minutes
                ))
            })?;
        Ok(Self::new(config.session_key.clone(), duration))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Record a login at `now`; returns the stored session.
    pub fn create<S: KeyValueStore>(
        &self,
        store: &mut S,
        now: DateTime<Utc>,
    ) -> Result<Session, CoreError> {
        let expiry = now.checked_add_signed(self.duration).ok_or_else(|| {
            CoreError::ValidationError(format!("Session expiry after {now} is out of range"))
        })?;
        let session = Session {
            expiry: expiry.timestamp_millis(),
        };
        let json = serde_json::to_string(&session)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize session: {e}")))?;
        store.set(&self.key, json)?;
        Ok(session)
    }

    /// `true` while a stored session has not expired. Expired or unreadable
    /// sessions are removed.
    pub fn is_active<S: KeyValueStore>(
        &self,
        store: &mut S,
        now: DateTime<Utc>,
    ) -> Result<bool, CoreError> {
        let Some(raw) = store.get(&self.key)? else {
            return Ok(false);
        };

        match serde_json::from_str::<Session>(&raw) {
            Ok(session) if now.timestamp_millis() < session.expiry => Ok(true),
            Ok(_) => {
                log::debug!("Session under {} expired", self.key);
                store.remove(&self.key)?;
                Ok(false)
            }
            Err(e) => {
                log::debug!("Discarding unreadable session under {}: {e}", self.key);
                store.remove(&self.key)?;
                Ok(false)
            }
        }
    }

    /// Like [`SessionGate::is_active`], but an inactive session is an error.
    pub fn require<S: KeyValueStore>(
        &self,
        store: &mut S,
        now: DateTime<Utc>,
    ) -> Result<(), CoreError> {
        if self.is_active(store, now)? {
            Ok(())
        } else {
            Err(CoreError::SessionExpired)
        }
    }

    pub fn end<S: KeyValueStore>(&self, store: &mut S) -> Result<(), CoreError> {
        store.remove(&self.key)
    }
}
