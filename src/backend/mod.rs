//! Engine seam
//!
//! Asset and scene code talk to the engine only through these two traits:
//! `Backend` for GPU upload, font parsing and audio, `Canvas` for drawing in
//! logical screen coordinates. `Macroquad` is the real implementation.

mod quad;

pub use quad::{Macroquad, ScreenCanvas};

use std::cell::RefCell;
use std::collections::VecDeque;

use image::RgbaImage;
use macroquad::color::Color;

use crate::assets::{AssetError, FontFace, Sprite};

/// Decoding, upload and playback
///
/// Methods take `&self`: the engine keeps its own global state, and scenes
/// only ever hold a shared borrow of the asset store.
pub trait Backend: 'static {
    /// Uploaded texture handle
    type Image: 'static;
    /// Parsed font, shared by every face size
    type Font: Clone + 'static;
    /// Decoded, playable music track
    type Music: 'static;

    /// Upload already-decoded RGBA pixels
    fn upload_image(&self, image: &RgbaImage) -> Self::Image;

    fn load_font(&self, name: &str, bytes: &[u8]) -> Result<Self::Font, AssetError>;

    fn load_music(&self, name: &str, bytes: &[u8]) -> Result<Self::Music, AssetError>;

    /// Start a track looping at the given volume
    fn play_music(&self, music: &Self::Music, volume: f32);

    /// Decode encoded sound bytes and play them once, immediately
    fn play_sound_effect(&self, bytes: &[u8]) -> Result<(), AssetError>;
}

/// Drawing in logical coordinates
pub trait Canvas<B: Backend> {
    /// Fill the whole logical screen
    fn fill(&mut self, color: Color);

    /// Draw a sprite with its top-left corner at (x, y), uniformly scaled
    fn draw_image(&mut self, sprite: &Sprite<B::Image>, x: f32, y: f32, scale: f32);

    /// Draw text with a loaded font face, top-left at (x, y)
    fn draw_text(&mut self, text: &str, face: &FontFace<B::Font>, x: f32, y: f32);

    /// Draw text with the engine's built-in debug font, top-left at (x, y)
    fn debug_print(&mut self, text: &str, x: f32, y: f32);
}

/// Sound effect handles held while they play
///
/// Dropping a decoded sound stops it, so a fire-and-forget effect has to
/// outlive the call that started it. Once `capacity` handles are held the
/// oldest is released.
pub struct LiveSounds<S> {
    sounds: RefCell<VecDeque<S>>,
    capacity: usize,
}

impl<S> LiveSounds<S> {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            sounds: RefCell::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn keep(&self, sound: S) {
        let mut sounds = self.sounds.borrow_mut();
        if sounds.len() == self.capacity {
            sounds.pop_front();
        }
        sounds.push_back(sound);
    }

    #[cfg(test)]
    pub fn held(&self) -> Vec<S>
    where
        S: Clone,
    {
        self.sounds.borrow().iter().cloned().collect()
    }
}
