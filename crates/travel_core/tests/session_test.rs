//! Session gate and login flow over an in-memory store.

use pretty_assertions::assert_eq;
use travel_core::session::{self, GateDecision, Session, KEY_LOGGED_IN, KEY_USERNAME};
use travel_core::{
    auth, AppConfig, AuthError, CredentialVerifier, DemoCredentials, KeyValueStore, MemoryStore, StorageError,
};

/// Refuses writes to one key, like a full `localStorage`.
struct RefusesKey {
    key: &'static str,
    inner: MemoryStore,
}

impl KeyValueStore for RefusesKey {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if key == self.key {
            return Err(StorageError::Unavailable("quota exceeded".to_string()));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}

fn demo() -> DemoCredentials {
    DemoCredentials::from_config(&AppConfig::default())
}

#[test]
fn gate_redirects_without_session() {
    let store = MemoryStore::new();
    assert_eq!(session::gate(&store), GateDecision::Redirect);
}

#[test]
fn login_with_demo_pair_sets_both_keys() {
    let store = MemoryStore::new();
    let session = auth::login(&demo(), &store, "admin", "password123").unwrap();
    assert_eq!(
        session,
        Session {
            username: "admin".to_string()
        }
    );
    assert_eq!(store.get(KEY_LOGGED_IN).unwrap().as_deref(), Some("true"));
    assert_eq!(store.get(KEY_USERNAME).unwrap().as_deref(), Some("admin"));
    assert_eq!(session::gate(&store), GateDecision::Render(session));
}

#[test]
fn rejected_login_leaves_store_untouched() {
    let store = MemoryStore::new();
    for (user, pass) in [
        ("admin", "wrong"),
        ("Admin", "password123"),
        ("admin ", "password123"),
        ("", ""),
        ("guest", "password123"),
    ] {
        let err = auth::login(&demo(), &store, user, pass).unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert_eq!(err.to_string(), "❌ Invalid username or password.");
    }
    assert!(store.is_empty());
    assert_eq!(session::gate(&store), GateDecision::Redirect);
}

#[test]
fn logout_clears_both_keys() {
    let store = MemoryStore::new();
    auth::login(&demo(), &store, "admin", "password123").unwrap();
    session::end(&store).unwrap();
    assert_eq!(store.get(KEY_LOGGED_IN).unwrap(), None);
    assert_eq!(store.get(KEY_USERNAME).unwrap(), None);
    assert_eq!(session::gate(&store), GateDecision::Redirect);
}

#[test]
fn end_without_session_is_fine() {
    let store = MemoryStore::new();
    session::end(&store).unwrap();
    assert!(store.is_empty());
}

#[test]
fn configured_pair_replaces_default() {
    let config = AppConfig {
        demo_username: "traveller".to_string(),
        demo_password: "s3cret".to_string(),
        ..AppConfig::default()
    };
    let verifier = DemoCredentials::from_config(&config);
    assert!(verifier.verify("traveller", "s3cret"));
    assert!(!verifier.verify("admin", "password123"));
}

#[test]
fn custom_verifier_plugs_in() {
    struct AllowAll;
    impl CredentialVerifier for AllowAll {
        fn verify(&self, _username: &str, _password: &str) -> bool {
            true
        }
    }
    let store = MemoryStore::new();
    let session = auth::login(&AllowAll, &store, "anyone", "x").unwrap();
    assert_eq!(session.username, "anyone");
}

#[test]
fn debug_output_hides_password() {
    let rendered = format!("{:?}", demo());
    assert!(rendered.contains("admin"));
    assert!(!rendered.contains("password123"));
}

#[test]
fn failed_username_write_does_not_open_the_gate() {
    let store = RefusesKey {
        key: KEY_USERNAME,
        inner: MemoryStore::new(),
    };
    let err = auth::login(&demo(), &store, "admin", "password123").unwrap_err();
    assert!(matches!(err, AuthError::Storage(_)));
    assert_eq!(store.get(KEY_LOGGED_IN).unwrap(), None);
    assert_eq!(session::gate(&store), GateDecision::Redirect);
}

#[test]
fn failed_flag_write_does_not_open_the_gate() {
    let store = RefusesKey {
        key: KEY_LOGGED_IN,
        inner: MemoryStore::new(),
    };
    assert!(session::begin(&store, "admin").is_err());
    assert_eq!(session::gate(&store), GateDecision::Redirect);
}
