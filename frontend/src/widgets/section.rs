use dioxus::prelude::*;
use crate::theme::{spacing, AppColors};

/// Titled dashboard section.
#[component]
pub fn Section(title: String, children: Element) -> Element {
    rsx! {
        section { style: "margin-bottom: {spacing::LG};",
            h2 { style: "color: {AppColors::PRIMARY_DARK}; font-size: 1.25rem; margin: 0 0 {spacing::SM} {spacing::SM};",
                "{title}"
            }
            {children}
        }
    }
}
