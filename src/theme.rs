//! Theme visuals and the toggler icon pair.

use eframe::egui;

use crate::settings::ThemeMode;

/// Externally hosted moon icon, referenced but never fetched by this crate.
pub const MOON_SVG: &str =
    "https://raw.githubusercontent.com/anjalbinayak/dark-theme-switcher/master/assets/svgs/moon.svg";
/// Externally hosted sun icon, referenced but never fetched by this crate.
pub const SUN_SVG: &str =
    "https://raw.githubusercontent.com/anjalbinayak/dark-theme-switcher/master/assets/svgs/sun.svg";

/// The toggler's icon: always the theme a click would switch to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Icon {
    Moon,
    Sun,
}

impl Icon {
    /// Icon shown while `mode` is active.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Icon::Moon,
            ThemeMode::Dark => Icon::Sun,
        }
    }

    /// Glyph used by text-based renderers such as the demo app.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Moon => "🌙",
            Icon::Sun => "☀",
        }
    }

    /// Absolute URL of the hosted SVG asset for this icon.
    pub fn url(self) -> &'static str {
        match self {
            Icon::Moon => MOON_SVG,
            Icon::Sun => SUN_SVG,
        }
    }
}

/// Apply the selected theme to the egui context.
pub fn apply_theme(ctx: &egui::Context, mode: ThemeMode) {
    let visuals = match mode {
        ThemeMode::Light => egui::Visuals::light(),
        ThemeMode::Dark => egui::Visuals::dark(),
    };
    ctx.set_visuals(visuals);
}
