use dioxus::prelude::*;
use crate::theme::{spacing, AppColors};

#[component]
pub fn GradientCard(children: Element) -> Element {
    rsx! {
        div {
            style: "background: {AppColors::CARD}; border-radius: 12px; padding: {spacing::CARD_PADDING}; margin: {spacing::SM}; box-shadow: 0 2px 10px rgba(0,0,0,0.08);",
            {children}
        }
    }
}
