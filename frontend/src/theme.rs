//! App theme: colors and spacing shared by screens and widgets.

/// Warm "Indore" palette: saffron primary, teal accents on a cream surface.
#[derive(Clone, Copy)]
pub struct AppColors;

impl AppColors {
    pub const PRIMARY: &'static str = "#E8751A";
    pub const PRIMARY_DARK: &'static str = "#B85400";
    pub const ACCENT: &'static str = "#0F8B8D";
    pub const SURFACE: &'static str = "#FFF8F0";
    pub const CARD: &'static str = "rgba(255,255,255,0.96)";
    pub const ON_SURFACE: &'static str = "#2B2118";
    pub const MUTED: &'static str = "#888888";
    pub const ERROR: &'static str = "#BA1A1A";
    pub const DANGER: &'static str = "#D64545";

    pub const HERO_GRADIENT: &'static str = "linear-gradient(135deg, #E8751A 0%, #F4A259 55%, #0F8B8D 100%)";
    pub const LOGIN_GRADIENT: &'static str = "linear-gradient(160deg, #0F8B8D 0%, #E8751A 100%)";

    /// Confetti piece colors, cycled by index.
    pub const CONFETTI: [&'static str; 6] = ["#E8751A", "#0F8B8D", "#F4D35E", "#EE4266", "#3BCEAC", "#540D6E"];
}

/// 8px grid spacing.
pub mod spacing {
    pub const XS: &'static str = "4px";
    pub const SM: &'static str = "8px";
    pub const MD: &'static str = "16px";
    pub const LG: &'static str = "24px";
    pub const CARD_PADDING: &'static str = "16px";
    pub const SCREEN_PADDING: &'static str = "24px";
    pub const CONTENT_WIDTH: &'static str = "960px";
}
