use dioxus::prelude::*;
use std::rc::Rc;
use travel_core::session::{self, GateDecision};
use travel_core::storage::{DownloadSink, KeyValueStore, MemoryStore};
use travel_core::{AppConfig, CredentialVerifier, DemoCredentials};
use tracing::warn;

use crate::platform;
use crate::screens::{DashboardScreen, LoginScreen};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
}

/// Collaborators shared by both screens through context.
#[derive(Clone)]
pub struct Services {
    pub store: Rc<dyn KeyValueStore>,
    pub sink: Rc<dyn DownloadSink>,
    pub verifier: Rc<dyn CredentialVerifier>,
}

impl Services {
    pub fn open(config: &AppConfig) -> Self {
        let store = platform::open_store(config).unwrap_or_else(|err| {
            warn!(error = %err, "persistent store unavailable, session will not survive a reload");
            Rc::new(MemoryStore::new()) as Rc<dyn KeyValueStore>
        });
        Self {
            store,
            sink: platform::download_sink(config),
            verifier: Rc::new(DemoCredentials::from_config(config)),
        }
    }
}

/// Start on the dashboard only when a session is already stored.
pub fn entry_route(store: &dyn KeyValueStore) -> Route {
    match session::gate(store) {
        GateDecision::Render(_) => Route::Dashboard,
        GateDecision::Redirect => Route::Login,
    }
}

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let services = use_context_provider(|| Services::open(&config));
    let mut route = use_signal(|| entry_route(services.store.as_ref()));

    let current_screen = match route() {
        Route::Login => rsx! {
            LoginScreen {
                on_login_success: move |_| route.set(Route::Dashboard),
            }
        },
        Route::Dashboard => rsx! {
            DashboardScreen {
                on_leave: move |_| route.set(Route::Login),
            }
        },
    };

    rsx! {
        div { style: "font-family: system-ui, 'Segoe UI', sans-serif;",
            {current_screen}
        }
    }
}
