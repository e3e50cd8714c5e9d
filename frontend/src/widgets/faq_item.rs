use dioxus::prelude::*;
use crate::theme::{spacing, AppColors};

/// One question/answer pair. Each item keeps its own open state.
#[component]
pub fn FaqItem(question: &'static str, answer: &'static str) -> Element {
    let mut open = use_signal(|| false);
    let chevron = if open() { "▲" } else { "▼" };

    rsx! {
        div { style: "border-bottom: 1px solid #F0E0CC;",
            div {
                style: "display: flex; justify-content: space-between; cursor: pointer; padding: {spacing::MD} {spacing::SM}; font-weight: 600;",
                onclick: move |_| open.toggle(),
                span { "{question}" }
                span { style: "color: {AppColors::PRIMARY};", "{chevron}" }
            }
            if open() {
                div { style: "padding: 0 {spacing::SM} {spacing::MD}; color: {AppColors::ON_SURFACE}; opacity: 0.85;",
                    "{answer}"
                }
            }
        }
    }
}
