//! Mobile entry configuration
//!
//! Android and iOS run the same `main` as desktop; macroquad's platform glue
//! is the plugin host. What differs is the window: always fullscreen, high
//! DPI, never resizable. Packaging lives in `Cargo.toml`
//! (`[package.metadata.android]`) and `cargo xtask build-android|build-ios`.

use macroquad::prelude::Conf;

use crate::config::Settings;

/// True when built for a phone or tablet
pub const fn is_mobile() -> bool {
    cfg!(any(target_os = "android", target_os = "ios"))
}

/// Window configuration for mobile targets
pub fn conf(settings: &Settings) -> Conf {
    Conf {
        window_title: settings.window_title.clone(),
        fullscreen: true,
        high_dpi: true,
        window_resizable: false,
        ..Default::default()
    }
}
