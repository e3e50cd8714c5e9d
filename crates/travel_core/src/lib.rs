//! Travel planner client core: session gate, login check, expense tracker and
//! the static guide content. No UI dependency; the Dioxus frontend drives it.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod expenses;
pub mod notice;
pub mod session;
pub mod storage;

pub use auth::{login, CredentialVerifier, DemoCredentials};
pub use config::AppConfig;
pub use error::{AuthError, ExpenseError, StorageError};
pub use expenses::{Added, ExpenseRecord, ExpenseTracker, TripExport};
pub use notice::{NoticeId, TransientNotice};
pub use session::{GateDecision, Session};
pub use storage::{DownloadSink, KeyValueStore, MemoryStore};
