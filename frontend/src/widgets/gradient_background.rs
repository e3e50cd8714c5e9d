use dioxus::prelude::*;
use crate::theme::AppColors;

/// Full-height page background; any CSS `background` value.
#[component]
pub fn GradientBackground(
    #[props(default = AppColors::SURFACE)] background: &'static str,
    children: Element,
) -> Element {
    rsx! {
        div {
            style: "min-height: 100vh; background: {background}; color: {AppColors::ON_SURFACE};",
            {children}
        }
    }
}
