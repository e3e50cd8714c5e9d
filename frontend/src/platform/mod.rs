//! Platform adapters: key-value store, file download, prompts and timers.
//! Browser (wasm32) and native desktop expose the same functions.

#[cfg(target_arch = "wasm32")]
mod web;
#[cfg(target_arch = "wasm32")]
pub use web::{alert, confirm, download_sink, open_store, sleep, BrowserDownload, LocalStore};

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(not(target_arch = "wasm32"))]
pub use native::{alert, confirm, data_dir, download_sink, open_store, sleep};
