use dioxus::document;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;
use travel_core::storage::{DirectorySink, DownloadSink, KeyValueStore, SqliteStore};
use travel_core::{AppConfig, StorageError};
use tracing::warn;

/// `TRAVEL_DATA_DIR`, else `<platform data dir>/travel-planner`.
pub fn data_dir(config: &AppConfig) -> PathBuf {
    config
        .data_dir
        .clone()
        .or_else(|| dirs::data_dir().map(|dir| dir.join("travel-planner")))
        .unwrap_or_else(|| PathBuf::from(".travel-planner"))
}

pub fn open_store(config: &AppConfig) -> Result<Rc<dyn KeyValueStore>, StorageError> {
    Ok(Rc::new(SqliteStore::open(&data_dir(config))?))
}

/// Exports land in the user's Downloads folder when there is one.
pub fn download_sink(config: &AppConfig) -> Rc<dyn DownloadSink> {
    let dir = dirs::download_dir().unwrap_or_else(|| data_dir(config).join("exports"));
    Rc::new(DirectorySink::new(dir))
}

fn js_string(text: &str) -> String {
    serde_json::Value::from(text).to_string()
}

pub fn alert(message: &str) {
    // The webview shows the dialog; nothing to wait for.
    let _ = document::eval(&format!("alert({});", js_string(message)));
}

pub async fn confirm(message: &str) -> bool {
    match document::eval(&format!("return confirm({});", js_string(message)))
        .join::<bool>()
        .await
    {
        Ok(answer) => answer,
        Err(err) => {
            warn!(error = ?err, "confirm dialog failed, treating as declined");
            false
        }
    }
}

pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
