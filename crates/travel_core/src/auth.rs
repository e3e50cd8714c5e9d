//! Login check. The built-in verifier is a demo gate, not access control;
//! plug an identity provider in through [`CredentialVerifier`].

use crate::config::AppConfig;
use crate::error::AuthError;
use crate::session::{self, Session};
use crate::storage::KeyValueStore;
use tracing::{info, warn};

pub trait CredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Accepts exactly one configured username/password pair.
#[derive(Clone)]
pub struct DemoCredentials {
    username: String,
    password: String,
}

impl DemoCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.demo_username.clone(), config.demo_password.clone())
    }
}

impl std::fmt::Debug for DemoCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemoCredentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl CredentialVerifier for DemoCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

/// Check the pair and, on success, write the session keys.
/// A rejected login leaves the store untouched.
pub fn login(
    verifier: &dyn CredentialVerifier,
    store: &dyn KeyValueStore,
    username: &str,
    password: &str,
) -> Result<Session, AuthError> {
    if !verifier.verify(username, password) {
        warn!(username, "login rejected");
        return Err(AuthError::InvalidCredentials);
    }
    let session = session::begin(store, username)?;
    info!(username, "login accepted");
    Ok(session)
}
