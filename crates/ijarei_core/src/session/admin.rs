//! Admin session lifecycle.
//!
//! # Responsibility
//! - Load, create and clear the admin session kept in key/value storage.
//! - Decide whether the stored session is still inside its time box.
//!
//! # Invariants
//! - The session lives under `adminToken` (opaque) and `adminSession`
//!   (`{"loginTime": <epoch ms>}`).
//! - A session is valid while `now - loginTime < ttl`. A login time too far
//!   from `now` to subtract counts as expired.
//! - Expired or malformed sessions clear both keys on load.
//! - Missing keys mean unauthenticated and clear nothing.
//! - The token is never verified; this is a client-side gate only.

use crate::forms::account::AdminLoginForm;
use crate::forms::{FieldErrors, FormModel};
use crate::session::storage::{SessionStorage, StorageError};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

pub const ADMIN_TOKEN_KEY: &str = "adminToken";
pub const ADMIN_SESSION_KEY: &str = "adminSession";
/// 24 hours.
pub const SESSION_TTL_MS: i64 = 86_400_000;

/// Stored `adminSession` JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub login_time: i64,
}

/// Authenticated admin session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    pub token: String,
    pub login_time: i64,
    pub expires_at: i64,
}

impl AdminSession {
    /// Milliseconds left before expiry at `now_ms`.
    pub fn remaining_ms(&self, now_ms: i64) -> i64 {
        self.expires_at.saturating_sub(now_ms).max(0)
    }
}

/// Result of inspecting stored session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    /// A session existed but outlived its time box; it has been cleared.
    Expired,
    Authenticated(AdminSession),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Admin session errors.
#[derive(Debug)]
pub enum SessionError {
    /// Login form failed validation.
    InvalidCredentials(FieldErrors),
    Storage(StorageError),
    Encode(String),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredentials(errors) => write!(f, "invalid admin credentials: {errors}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::Encode(message) => write!(f, "failed to encode admin session: {message}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidCredentials(errors) => Some(errors),
            Self::Storage(err) => Some(err),
            Self::Encode(_) => None,
        }
    }
}

impl From<StorageError> for SessionError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Explicit admin session object over a storage backend.
pub struct SessionManager<S: SessionStorage> {
    storage: S,
    ttl_ms: i64,
}

impl<S: SessionStorage> SessionManager<S> {
    /// Creates a manager with the standard 24 hour time box.
    pub fn new(storage: S) -> Self {
        Self::with_ttl(storage, SESSION_TTL_MS)
    }

    pub fn with_ttl(storage: S, ttl_ms: i64) -> Self {
        Self { storage, ttl_ms }
    }

    pub fn ttl_ms(&self) -> i64 {
        self.ttl_ms
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Reads stored session state as of `now_ms`, expiring it if needed.
    pub fn load(&mut self, now_ms: i64) -> Result<SessionState, StorageError> {
        let token = self.storage.get_item(ADMIN_TOKEN_KEY)?;
        let raw_session = self.storage.get_item(ADMIN_SESSION_KEY)?;

        let (Some(token), Some(raw_session)) = (token, raw_session) else {
            return Ok(SessionState::Unauthenticated);
        };

        let record = match serde_json::from_str::<SessionRecord>(&raw_session) {
            Ok(record) => record,
            Err(err) => {
                warn!("event=admin_session module=session status=malformed error={err}");
                self.clear()?;
                return Ok(SessionState::Unauthenticated);
            }
        };

        let expired = now_ms
            .checked_sub(record.login_time)
            .map_or(true, |elapsed| elapsed >= self.ttl_ms);
        if expired {
            info!(
                "event=admin_session module=session status=expired login_time={}",
                record.login_time
            );
            self.clear()?;
            return Ok(SessionState::Expired);
        }

        Ok(SessionState::Authenticated(AdminSession {
            token,
            login_time: record.login_time,
            expires_at: record.login_time.saturating_add(self.ttl_ms),
        }))
    }

    /// Shorthand for `load(now_ms)?.is_authenticated()`.
    pub fn is_authenticated(&mut self, now_ms: i64) -> Result<bool, StorageError> {
        Ok(self.load(now_ms)?.is_authenticated())
    }

    /// Validates the admin login form and starts a new session at `now_ms`.
    ///
    /// Any previous session is overwritten.
    pub fn login(
        &mut self,
        credentials: &AdminLoginForm,
        now_ms: i64,
    ) -> Result<AdminSession, SessionError> {
        credentials
            .validate()
            .map_err(SessionError::InvalidCredentials)?;

        let token = Uuid::new_v4().to_string();
        let record = serde_json::to_string(&SessionRecord { login_time: now_ms })
            .map_err(|err| SessionError::Encode(err.to_string()))?;

        self.storage.set_item(ADMIN_TOKEN_KEY, &token)?;
        self.storage.set_item(ADMIN_SESSION_KEY, &record)?;
        info!("event=admin_login module=session status=ok login_time={now_ms}");

        Ok(AdminSession {
            token,
            login_time: now_ms,
            expires_at: now_ms.saturating_add(self.ttl_ms),
        })
    }

    /// Ends the session.
    pub fn logout(&mut self) -> Result<(), StorageError> {
        self.clear()?;
        info!("event=admin_logout module=session status=ok");
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.storage.remove_item(ADMIN_TOKEN_KEY)?;
        self.storage.remove_item(ADMIN_SESSION_KEY)?;
        Ok(())
    }
}

/// Current wall-clock time in Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
