use dioxus::core::Task;
use dioxus::prelude::*;
use std::time::Duration;
use travel_core::{auth, AppConfig, AuthError, Session, TransientNotice};
use tracing::error;

use crate::app::Services;
use crate::platform;
use crate::theme::{spacing, AppColors};
use crate::widgets::{GradientBackground, GradientCard};

const INPUT_STYLE: &str = "width: 100%; padding: 12px; border-radius: 8px; border: 1px solid #D9C7B3; background: #FFFFFF; box-sizing: border-box; font-size: 1rem;";

/// Login field state and the inline error that clears itself after
/// `AppConfig::login_error_timeout`. The clear timer belongs to the calling
/// component and is dropped with it.
#[derive(Clone)]
pub struct LoginForm {
    pub username: Signal<String>,
    pub password: Signal<String>,
    notice: Signal<TransientNotice>,
    clear_task: Signal<Option<Task>>,
    services: Services,
    error_timeout: Duration,
}

pub fn use_login_form() -> LoginForm {
    let config = use_context::<AppConfig>();
    let services = use_context::<Services>();
    LoginForm {
        username: use_signal(String::new),
        password: use_signal(String::new),
        notice: use_signal(TransientNotice::new),
        clear_task: use_signal(|| None),
        services,
        error_timeout: config.login_error_timeout,
    }
}

impl LoginForm {
    /// Check the entered pair. On failure the error text is shown and its clear timer restarted.
    pub fn submit(&mut self) -> Result<Session, AuthError> {
        let username = self.username.cloned();
        let password = self.password.cloned();
        let result = auth::login(
            self.services.verifier.as_ref(),
            self.services.store.as_ref(),
            &username,
            &password,
        );
        match &result {
            Ok(_) => self.notice.write().dismiss(),
            Err(err) => {
                if let AuthError::Storage(storage) = err {
                    error!(error = %storage, "could not write session");
                }
                self.show_error(err.to_string());
            }
        }
        result
    }

    fn show_error(&mut self, message: String) {
        let id = self.notice.write().show(message);
        if let Some(previous) = self.clear_task.write().take() {
            previous.cancel();
        }
        let mut notice = self.notice;
        let mut clear_task = self.clear_task;
        let timeout = self.error_timeout;
        let task = spawn(async move {
            platform::sleep(timeout).await;
            notice.write().expire(id);
            clear_task.set(None);
        });
        self.clear_task.set(Some(task));
    }

    pub fn error_text(&self) -> Option<String> {
        self.notice.read().message().map(str::to_string)
    }
}

#[component]
pub fn LoginScreen(on_login_success: EventHandler<()>) -> Element {
    let form = use_login_form();
    let mut username = form.username;
    let mut password = form.password;
    let error_text = form.error_text();

    let mut submitting = form.clone();
    let on_submit = move |ev: FormEvent| {
        ev.prevent_default();
        if submitting.submit().is_ok() {
            on_login_success.call(());
        }
    };

    rsx! {
        GradientBackground { background: AppColors::LOGIN_GRADIENT,
            div { style: "padding: 15vh {spacing::LG} {spacing::MD}; max-width: 380px; margin: 0 auto;",
                GradientCard {
                    form { onsubmit: on_submit,
                        h3 { style: "text-align: center; letter-spacing: 0.2em; color: {AppColors::PRIMARY_DARK}; margin: {spacing::SM} 0 {spacing::LG};",
                            "TRAVEL PLANNER"
                        }
                        div { style: "margin-bottom: {spacing::MD};",
                            input {
                                r#type: "text",
                                placeholder: "Username",
                                required: true,
                                value: "{username()}",
                                oninput: move |ev| username.set(ev.value()),
                                style: INPUT_STYLE,
                            }
                        }
                        div { style: "margin-bottom: {spacing::MD};",
                            input {
                                r#type: "password",
                                placeholder: "Password",
                                required: true,
                                value: "{password()}",
                                oninput: move |ev| password.set(ev.value()),
                                style: INPUT_STYLE,
                            }
                        }
                        button {
                            r#type: "submit",
                            style: "width: 100%; padding: 12px; border-radius: 8px; background: {AppColors::PRIMARY}; color: #FFFFFF; font-weight: 600; border: none; cursor: pointer; font-size: 1rem;",
                            "Login"
                        }
                        div { id: "error-message", style: "min-height: 1.4em; margin-top: {spacing::MD}; text-align: center; color: {AppColors::ERROR}; font-size: 0.9rem;",
                            if let Some(text) = error_text {
                                "{text}"
                            }
                        }
                    }
                }
            }
        }
    }
}
