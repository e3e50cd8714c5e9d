use gloo_timers::callback::Timeout;
use std::rc::Rc;
use std::time::Duration;
use travel_core::storage::{DownloadSink, KeyValueStore};
use travel_core::{AppConfig, StorageError};
use wasm_bindgen::{JsCast, JsValue};

const REVOKE_DELAY_MS: u32 = 1000;

fn js_err(err: JsValue) -> StorageError {
    StorageError::Unavailable(format!("{err:?}"))
}

fn window() -> Result<web_sys::Window, StorageError> {
    web_sys::window().ok_or_else(|| StorageError::Unavailable("window not available".to_string()))
}

/// `window.localStorage`, scoped to the page origin.
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    pub fn open() -> Result<Self, StorageError> {
        let storage = window()?
            .local_storage()
            .map_err(js_err)?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(js_err)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(js_err)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage.remove_item(key).map_err(js_err)
    }
}

/// Blob + object URL + a temporary `<a download>` click.
pub struct BrowserDownload;

impl DownloadSink for BrowserDownload {
    fn offer(&self, filename: &str, bytes: &[u8]) -> Result<(), StorageError> {
        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("application/json");
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

        let document = window()?
            .document()
            .ok_or_else(|| StorageError::Unavailable("document not available".to_string()))?;
        let anchor: web_sys::HtmlAnchorElement = document
            .create_element("a")
            .map_err(js_err)?
            .dyn_into()
            .map_err(|_| StorageError::Unavailable("could not create anchor".to_string()))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();

        // Revoking in the same tick can cancel the download in some browsers.
        Timeout::new(REVOKE_DELAY_MS, move || {
            let _ = web_sys::Url::revoke_object_url(&url);
        })
        .forget();
        Ok(())
    }
}

pub fn open_store(_config: &AppConfig) -> Result<Rc<dyn KeyValueStore>, StorageError> {
    Ok(Rc::new(LocalStore::open()?))
}

pub fn download_sink(_config: &AppConfig) -> Rc<dyn DownloadSink> {
    Rc::new(BrowserDownload)
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

pub async fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}
