use log::Level;

use crate::scroll::position::ActivationPolicy;

#[cfg(debug_assertions)]
pub fn asset_base_url() -> &'static str {
    "http://localhost:8080" // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn asset_base_url() -> &'static str {
    "" // Same origin
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Delay before the outline sweep attaches observers, so sections have mounted.
pub const SETTLE_DELAY_MS: u32 = 300;

/// An anchor counts as active as soon as any part of it is in the viewport.
pub const ANCHOR_ROOT_MARGIN: &str = "0px 0px 0px 0px";
pub const ANCHOR_THRESHOLD: f64 = 0.0;

pub const ACTIVATION_POLICY: ActivationPolicy = ActivationPolicy::NearestTop;

pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Hero scroll progress at which the page switches to the dark theme.
pub const HERO_DARK_PROGRESS: f64 = 0.8;

pub const CONTACT_EMAIL: &str = "contact@medera.ai";
