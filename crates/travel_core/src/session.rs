//! Session gate: a logged-in flag and a username in the key-value store.
//!
//! There is no expiry and no server check. Presence of a non-empty flag is the
//! whole session.

use crate::error::StorageError;
use crate::storage::KeyValueStore;
use tracing::{debug, info, warn};

pub const KEY_LOGGED_IN: &str = "isLoggedIn";
pub const KEY_USERNAME: &str = "username";

pub const LOGIN_REQUIRED_MESSAGE: &str = "⚠ Please login first!";
pub const LOGGED_OUT_MESSAGE: &str = "👋 Logged out successfully.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub username: String,
}

/// Outcome of the dashboard entry check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Render(Session),
    Redirect,
}

/// Stores the username, then the flag. A failed write never leaves a flag behind.
pub fn begin(store: &dyn KeyValueStore, username: &str) -> Result<Session, StorageError> {
    store.set(KEY_USERNAME, username)?;
    store.set(KEY_LOGGED_IN, "true")?;
    info!(username, "session started");
    Ok(Session {
        username: username.to_string(),
    })
}

pub fn current(store: &dyn KeyValueStore) -> Result<Option<Session>, StorageError> {
    let flag = store.get(KEY_LOGGED_IN)?;
    if flag.as_deref().map_or(true, str::is_empty) {
        return Ok(None);
    }
    let username = store.get(KEY_USERNAME)?.unwrap_or_default();
    Ok(Some(Session { username }))
}

/// Removes both keys. Safe to call without a session.
pub fn end(store: &dyn KeyValueStore) -> Result<(), StorageError> {
    store.remove(KEY_LOGGED_IN)?;
    store.remove(KEY_USERNAME)?;
    info!("session ended");
    Ok(())
}

pub fn gate(store: &dyn KeyValueStore) -> GateDecision {
    match current(store) {
        Ok(Some(session)) => {
            debug!(username = %session.username, "session gate passed");
            GateDecision::Render(session)
        }
        Ok(None) => {
            debug!("no session flag, redirecting to login");
            GateDecision::Redirect
        }
        Err(err) => {
            warn!(error = %err, "session read failed, redirecting to login");
            GateDecision::Redirect
        }
    }
}
