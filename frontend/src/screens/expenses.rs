use dioxus::prelude::*;
use std::time::Duration;
use travel_core::expenses::{self, RESET_CONFIRM_MESSAGE};
use travel_core::{AppConfig, ExpenseError, ExpenseTracker};
use tracing::error;

use crate::app::Services;
use crate::platform;
use crate::theme::{spacing, AppColors};
use crate::widgets::{Celebration, GradientCard};

const CELEBRATION_LENGTH: Duration = Duration::from_millis(3000);

const FIELD_STYLE: &str = "flex: 1; min-width: 120px; padding: 10px; border-radius: 8px; border: 1px solid #D9C7B3; font-size: 1rem;";
const BUTTON_STYLE: &str = "padding: 10px 18px; border-radius: 8px; border: none; cursor: pointer; font-weight: 600; color: #FFFFFF;";

/// Expense form, list, total and save/reset actions. The tracker lives as long as this panel.
#[component]
pub fn ExpensePanel() -> Element {
    let config = use_context::<AppConfig>();
    let services = use_context::<Services>();
    let mut tracker = use_signal(ExpenseTracker::new);
    let mut item = use_signal(String::new);
    let mut amount = use_signal(String::new);
    let mut celebrating = use_signal(|| false);

    let on_add = move |_: MouseEvent| {
        let result = tracker.write().add(&item(), &amount());
        match result {
            Ok(added) => {
                item.set(String::new());
                amount.set(String::new());
                if added.celebrate {
                    celebrating.set(true);
                    spawn(async move {
                        platform::sleep(CELEBRATION_LENGTH).await;
                        celebrating.set(false);
                    });
                }
            }
            Err(err) => platform::alert(&err.to_string()),
        }
    };

    let on_save = move |_: MouseEvent| {
        if let Err(err) = tracker.read().save_to(services.sink.as_ref(), &config.export_filename) {
            if !matches!(err, ExpenseError::NothingToExport) {
                error!(error = %err, "export failed");
            }
            platform::alert(&err.to_string());
        }
    };

    let on_reset = move |_: MouseEvent| {
        spawn(async move {
            let confirmed = platform::confirm(RESET_CONFIRM_MESSAGE).await;
            tracker.write().reset(confirmed);
        });
    };

    let records = tracker.read().records().to_vec();
    let total = tracker.read().formatted_total();

    rsx! {
        if celebrating() {
            Celebration {}
        }
        GradientCard {
            div { style: "display: flex; flex-wrap: wrap; gap: {spacing::SM}; margin-bottom: {spacing::MD};",
                input {
                    r#type: "text",
                    placeholder: "e.g., Poha, Hotel",
                    value: "{item()}",
                    oninput: move |ev| item.set(ev.value()),
                    style: FIELD_STYLE,
                }
                input {
                    r#type: "number",
                    placeholder: "₹ Amount",
                    step: "0.01",
                    min: "0.01",
                    value: "{amount()}",
                    oninput: move |ev| amount.set(ev.value()),
                    style: FIELD_STYLE,
                }
                button { onclick: on_add, style: "{BUTTON_STYLE} background: {AppColors::ACCENT};", "Add" }
            }
            div { id: "list",
                if records.is_empty() {
                    p { style: "text-align: center; color: {AppColors::MUTED};", "No expenses added." }
                }
                for (i, exp) in records.into_iter().enumerate() {
                    div {
                        key: "{i}",
                        style: "display: flex; justify-content: space-between; align-items: center; padding: {spacing::SM} {spacing::XS}; border-bottom: 1px dashed #F0E0CC;",
                        span {
                            strong { "{exp.item}" }
                            ": {expenses::format_amount(exp.amount)}"
                        }
                        button {
                            onclick: move |_| {
                                tracker.write().delete(i);
                            },
                            style: "background: none; border: none; cursor: pointer; font-size: 1.1rem;",
                            "🗑"
                        }
                    }
                }
            }
            div { style: "text-align: right; font-size: 1.2rem; font-weight: 700; margin: {spacing::MD} 0; color: {AppColors::PRIMARY_DARK};",
                "Total: {expenses::CURRENCY_SYMBOL}{total}"
            }
            div { style: "display: flex; gap: {spacing::SM}; justify-content: flex-end;",
                button { onclick: on_save, style: "{BUTTON_STYLE} background: {AppColors::PRIMARY};", "💾 Save" }
                button { onclick: on_reset, style: "{BUTTON_STYLE} background: {AppColors::DANGER};", "🗑 Reset" }
            }
        }
    }
}
