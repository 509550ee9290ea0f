//! Game Shell
//!
//! Bridges the frame loop in `main` to the scene director: one-time scene
//! registration, per-frame update/draw, and the fixed logical layout.

mod layout;
mod main_scene;

pub use layout::Viewport;
pub use main_scene::MainScene;

use crate::assets::Assets;
use crate::backend::{Backend, Canvas};
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::GameError;
use crate::input::Input;
use crate::scene::Director;

pub struct Game<B: Backend> {
    director: Director<B>,
    assets: Assets<B>,
    bgm_volume: f32,
    /// Set once the scenes are registered
    initialized: bool,
}

impl<B: Backend> Game<B> {
    /// Takes a fully loaded store, so no scene can run before assets exist
    pub fn new(director: Director<B>, assets: Assets<B>, bgm_volume: f32) -> Self {
        Self {
            director,
            assets,
            bgm_volume,
            initialized: false,
        }
    }

    fn init(&mut self) -> Result<(), GameError> {
        let scene = Box::new(MainScene::new(self.bgm_volume));
        self.director.add_scene(scene, &self.assets)
    }

    /// Per-frame logic. Registers the scenes on the first call.
    pub fn update(&mut self, input: &dyn Input) -> Result<(), GameError> {
        if !self.initialized {
            self.initialized = true;
            self.init()?;
        }
        self.director.update(&self.assets, input)
    }

    /// Draw the current scene with an FPS counter on top
    pub fn draw(&self, canvas: &mut dyn Canvas<B>, fps: f32) {
        self.director.draw(&self.assets, canvas);
        canvas.debug_print(&format!("FPS: {:.2}", fps), 12.0, 12.0);
    }

    /// Logical resolution, independent of the window size
    pub fn layout(&self, _outside_width: f32, _outside_height: f32) -> (f32, f32) {
        (SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    pub fn director(&self) -> &Director<B> {
        &self.director
    }

    #[cfg(test)]
    pub fn assets(&self) -> &Assets<B> {
        &self.assets
    }
}
