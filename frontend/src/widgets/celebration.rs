use dioxus::prelude::*;
use crate::theme::AppColors;

const PIECES: usize = 100;

const CONFETTI_CSS: &str = r#"
@keyframes travel-confetti-fall {
    0%   { transform: translate3d(0, -10vh, 0) rotate(0deg); opacity: 1; }
    100% { transform: translate3d(var(--drift), 105vh, 0) rotate(720deg); opacity: 0; }
}
"#;

/// Full-screen confetti burst. Purely visual; the parent decides how long it stays mounted.
#[component]
pub fn Celebration() -> Element {
    rsx! {
        style { {CONFETTI_CSS} }
        div {
            style: "position: fixed; inset: 0; pointer-events: none; overflow: hidden; z-index: 1000;",
            for i in 0..PIECES {
                span { key: "{i}", style: "{piece_style(i)}" }
            }
        }
    }
}

/// Deterministic scatter so no RNG is needed.
fn piece_style(i: usize) -> String {
    let left = (i * 37) % 100;
    let delay_ms = (i * 53) % 700;
    let duration_ms = 1600 + (i * 29) % 900;
    let drift = ((i * 7) % 90) as i64 - 45;
    let size = 6 + i % 5;
    let color = AppColors::CONFETTI[i % AppColors::CONFETTI.len()];
    format!(
        "position: absolute; top: 0; left: {left}%; width: {size}px; height: {h}px; background: {color}; \
         --drift: {drift}vw; animation: travel-confetti-fall {duration_ms}ms ease-in {delay_ms}ms forwards; opacity: 0;",
        h = size * 2 / 3 + 2,
    )
}

#[cfg(test)]
mod tests {
    use super::piece_style;

    #[test]
    fn pieces_stay_on_screen_horizontally() {
        for i in 0..super::PIECES {
            let style = piece_style(i);
            let left: usize = style
                .split("left: ")
                .nth(1)
                .and_then(|rest| rest.split('%').next())
                .and_then(|n| n.parse().ok())
                .unwrap();
            assert!(left < 100);
        }
    }
}
