use dioxus::prelude::*;
use travel_core::catalog::{self, Place};
use travel_core::session::{self, GateDecision, LOGGED_OUT_MESSAGE, LOGIN_REQUIRED_MESSAGE};
use tracing::error;

use crate::app::Services;
use crate::platform;
use crate::screens::ExpensePanel;
use crate::theme::{spacing, AppColors};
use crate::widgets::{FaqItem, GradientBackground, GradientCard, Section};

/// Guide + expense tracker. Checks the stored session once on mount and calls
/// `on_leave` both on logout and when there is no session.
#[component]
pub fn DashboardScreen(on_leave: EventHandler<()>) -> Element {
    let services = use_context::<Services>();
    let gate = use_hook(|| session::gate(services.store.as_ref()));

    let redirect = gate == GateDecision::Redirect;
    use_effect(move || {
        if redirect {
            platform::alert(LOGIN_REQUIRED_MESSAGE);
            on_leave.call(());
        }
    });

    let GateDecision::Render(current) = gate else {
        return rsx! {};
    };

    let on_logout = move |_: MouseEvent| {
        if let Err(err) = session::end(services.store.as_ref()) {
            error!(error = %err, "could not clear session");
        }
        platform::alert(LOGGED_OUT_MESSAGE);
        on_leave.call(());
    };

    rsx! {
        GradientBackground {
            div { style: "display: flex; justify-content: flex-end; padding: {spacing::MD} {spacing::LG} 0;",
                button {
                    onclick: on_logout,
                    style: "padding: 8px 16px; border-radius: 8px; border: 1px solid {AppColors::PRIMARY}; background: transparent; color: {AppColors::PRIMARY_DARK}; cursor: pointer;",
                    "🚪 Logout"
                }
            }
            h2 { style: "padding: 0 {spacing::SCREEN_PADDING}; margin: {spacing::SM} 0;",
                "Welcome, {current.username}!"
            }
            header { style: "background: {AppColors::HERO_GRADIENT}; color: #FFFFFF; padding: 48px {spacing::SCREEN_PADDING}; text-align: center; margin-bottom: {spacing::LG};",
                h1 { style: "margin: 0 0 {spacing::SM}; font-size: 2.2rem;", "{catalog::GUIDE_TITLE}" }
                div { style: "display: inline-block; padding: 6px 14px; border-radius: 999px; background: rgba(255,255,255,0.2);",
                    "📍 {catalog::GUIDE_LOCATION}"
                }
            }
            div { style: "max-width: {spacing::CONTENT_WIDTH}; margin: 0 auto; padding: 0 {spacing::MD} {spacing::LG};",
                Section { title: "🏛 Top Destinations",
                    PlaceCards { places: catalog::DESTINATIONS }
                }
                Section { title: "🏨 Hotel Stays",
                    PlaceCards { places: catalog::STAYS }
                }
                Section { title: "🚌 Transport Info",
                    GradientCard {
                        ul { style: "list-style: none; margin: 0; padding: 0;",
                            for rate in catalog::TRANSPORT.iter() {
                                li { key: "{rate.mode}", style: "padding: {spacing::XS} 0;",
                                    "{rate.icon()} {rate.mode}: {rate.detail}"
                                }
                            }
                        }
                    }
                }
                Section { title: "💸 Expense Tracker",
                    ExpensePanel {}
                }
                Section { title: "❓ FAQ",
                    GradientCard {
                        for entry in catalog::FAQ.iter() {
                            FaqItem { key: "{entry.question}", question: entry.question, answer: entry.answer }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PlaceCards(places: &'static [Place]) -> Element {
    rsx! {
        div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));",
            for place in places.iter() {
                GradientCard { key: "{place.title}",
                    h3 { style: "margin: 0 0 {spacing::XS}; font-size: 1.05rem;", "{place.title}" }
                    p { style: "margin: 0; opacity: 0.8;", "{place.description}" }
                }
            }
        }
    }
}
