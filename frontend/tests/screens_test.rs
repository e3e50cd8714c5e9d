//! Login and dashboard screens mounted in a headless `VirtualDom` over an in-memory store.
//! Tokio time is paused, so the login error timer runs without real waiting.

use dioxus::prelude::*;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use tokio::time::{timeout, timeout_at, Instant};
use travel_core::session;
use travel_core::storage::{DownloadSink, KeyValueStore, MemoryStore};
use travel_core::{AppConfig, DemoCredentials, StorageError};
use travel_planner_frontend::app::Services;
use travel_planner_frontend::screens::{use_login_form, DashboardScreen, LoginScreen};

const ERROR_TIMEOUT: Duration = Duration::from_millis(200);
const INVALID_LOGIN: &str = "Invalid username or password.";

struct DiscardSink;

impl DownloadSink for DiscardSink {
    fn offer(&self, _filename: &str, _bytes: &[u8]) -> Result<(), StorageError> {
        Ok(())
    }
}

/// Counts `on_leave` calls made by the dashboard.
#[derive(Clone, Default)]
struct Leaves(Rc<Cell<u32>>);

fn config() -> AppConfig {
    AppConfig {
        login_error_timeout: ERROR_TIMEOUT,
        ..AppConfig::default()
    }
}

fn mount(root: fn() -> Element, store: Rc<MemoryStore>, leaves: Leaves) -> VirtualDom {
    let config = config();
    let services = Services {
        store,
        sink: Rc::new(DiscardSink),
        verifier: Rc::new(DemoCredentials::from_config(&config)),
    };
    let mut dom = VirtualDom::new(root)
        .with_root_context(config)
        .with_root_context(services)
        .with_root_context(leaves);
    dom.rebuild_in_place();
    dom
}

/// Poll tasks and re-render until `span` of (paused) time has passed.
async fn run_for(dom: &mut VirtualDom, span: Duration) {
    let deadline = Instant::now() + span;
    while timeout_at(deadline, dom.wait_for_work()).await.is_ok() {
        let _ = dom.render_immediate_to_vec();
    }
}

#[component]
fn RejectedLogin() -> Element {
    let form = use_login_form();
    let mut submitting = form.clone();
    use_hook(move || {
        spawn(async move {
            submitting.username.set("admin".to_string());
            submitting.password.set("wrong".to_string());
            let _ = submitting.submit();
        });
    });
    rsx! {
        p { id: "error-message",
            if let Some(text) = form.error_text() {
                "{text}"
            }
        }
    }
}

#[component]
fn LeavesLoginEarly() -> Element {
    let mut visible = use_signal(|| true);
    use_hook(move || {
        spawn(async move {
            tokio::time::sleep(ERROR_TIMEOUT / 4).await;
            visible.set(false);
        });
    });
    rsx! {
        if visible() {
            RejectedLogin {}
        } else {
            p { "left login" }
        }
    }
}

#[component]
fn Login() -> Element {
    rsx! {
        LoginScreen { on_login_success: move |_| {} }
    }
}

#[component]
fn GatedDashboard() -> Element {
    let leaves = use_context::<Leaves>();
    rsx! {
        DashboardScreen {
            on_leave: move |_| leaves.0.set(leaves.0.get() + 1),
        }
    }
}

#[tokio::test(start_paused = true)]
async fn login_screen_starts_without_error() {
    let mut dom = mount(Login, Rc::new(MemoryStore::new()), Leaves::default());
    run_for(&mut dom, Duration::from_millis(10)).await;
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("TRAVEL PLANNER"));
    assert!(!html.contains(INVALID_LOGIN));
}

#[tokio::test(start_paused = true)]
async fn rejected_login_error_clears_after_timeout() {
    let store = Rc::new(MemoryStore::new());
    let mut dom = mount(RejectedLogin, store.clone(), Leaves::default());

    run_for(&mut dom, ERROR_TIMEOUT / 2).await;
    assert!(dioxus_ssr::render(&dom).contains(INVALID_LOGIN));
    assert!(store.is_empty());

    run_for(&mut dom, ERROR_TIMEOUT).await;
    assert!(!dioxus_ssr::render(&dom).contains(INVALID_LOGIN));
}

#[tokio::test(start_paused = true)]
async fn leaving_login_drops_pending_error_timer() {
    let mut dom = mount(LeavesLoginEarly, Rc::new(MemoryStore::new()), Leaves::default());

    run_for(&mut dom, ERROR_TIMEOUT / 2).await;
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("left login"));
    assert!(!html.contains(INVALID_LOGIN));

    // The clear timer went away with the login component: nothing wakes the dom past its deadline.
    assert!(timeout(ERROR_TIMEOUT * 4, dom.wait_for_work()).await.is_err());
}

#[tokio::test(start_paused = true)]
async fn dashboard_without_session_renders_nothing_and_leaves() {
    let leaves = Leaves::default();
    let mut dom = mount(GatedDashboard, Rc::new(MemoryStore::new()), leaves.clone());

    run_for(&mut dom, Duration::from_millis(10)).await;
    let html = dioxus_ssr::render(&dom);
    assert!(!html.contains("Welcome"));
    assert!(!html.contains("Expense Tracker"));
    assert_eq!(leaves.0.get(), 1);
}

#[tokio::test(start_paused = true)]
async fn dashboard_with_session_greets_user() {
    let store = Rc::new(MemoryStore::new());
    session::begin(store.as_ref(), "admin").unwrap();
    let leaves = Leaves::default();
    let mut dom = mount(GatedDashboard, store.clone(), leaves.clone());

    run_for(&mut dom, Duration::from_millis(10)).await;
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("Welcome, admin!"));
    assert!(html.contains("No expenses added."));
    assert_eq!(leaves.0.get(), 0);
    assert_eq!(store.get(session::KEY_USERNAME).unwrap().as_deref(), Some("admin"));
}
