//! mobile-game-template: a macroquad starter for mobile games
//!
//! Loads the bundled assets once, registers a single placeholder scene and
//! runs it until the player quits. The same entry point serves desktop,
//! Android and iOS.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod assets;
mod backend;
mod config;
mod error;
mod game;
mod input;
mod mobile;
mod scene;
#[cfg(test)]
mod testing;

use log::{error, info};
use macroquad::prelude::*;

use assets::{AssetSource, Assets, Directory, Embedded};
use backend::{Macroquad, ScreenCanvas};
use config::Settings;
use error::GameError;
use game::{Game, Viewport};
use input::InputState;
use scene::Director;

fn desktop_conf(settings: &Settings) -> Conf {
    Conf {
        window_title: settings.window_title.clone(),
        window_width: settings.window_width,
        window_height: settings.window_height,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

fn window_conf() -> Conf {
    // Runs before the logger exists; main reports settings errors properly
    let settings = Settings::load_or_default(&Settings::path())
        .unwrap_or_default()
        .sanitized();

    if mobile::is_mobile() {
        mobile::conf(&settings)
    } else {
        desktop_conf(&settings)
    }
}

/// Log a fatal error and terminate
fn fatal(err: &dyn std::fmt::Display) -> ! {
    error!("{}", err);
    std::process::exit(1);
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(any(target_arch = "wasm32", target_os = "android", target_os = "ios")))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("=== mobile-game-template v{} ===", VERSION);

    let settings_path = Settings::path();
    let settings = match Settings::load_or_default(&settings_path) {
        Ok(settings) => settings.sanitized(),
        Err(e) => fatal(&e),
    };
    info!("Settings from {}", settings_path.display());

    let mut director = Director::new(0, settings.lang);
    director.storage.init();

    let source: Box<dyn AssetSource> = match &settings.assets_dir {
        Some(dir) => Box::new(Directory::new(dir.clone())),
        None => Box::new(Embedded),
    };
    let assets = match Assets::load(source.as_ref(), Macroquad::default(), &settings.font_file) {
        Ok(assets) => assets,
        Err(e) => fatal(&e),
    };

    info!(
        "Assets: images [{}], data [{}], {} sound effects, {} music tracks",
        assets.image_names().join(", "),
        assets.json_names().join(", "),
        assets.sound_effect_count(),
        assets.music_count()
    );

    let mut game = Game::new(director, assets, settings.bgm_volume);
    let mut input = InputState::new();

    loop {
        input.poll();

        match game.update(&input) {
            Ok(()) => {}
            Err(GameError::ExitRequested) => {
                info!("Exit requested in scene {:?}", game.director().current_id());
                break;
            }
            Err(e) => fatal(&e),
        }

        let outside = (screen_width(), screen_height());
        let logical = game.layout(outside.0, outside.1);
        let mut canvas = ScreenCanvas::new(Viewport::fit(outside, logical), logical);

        // Letterbox bars
        clear_background(BLACK);
        game.draw(&mut canvas, get_fps() as f32);

        next_frame().await;
    }
}
