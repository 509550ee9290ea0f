//! macroquad implementation of the engine seam

use macroquad::audio::{load_sound_from_bytes, play_sound, play_sound_once, PlaySoundParams, Sound};
use macroquad::prelude::*;

use super::{Backend, Canvas, LiveSounds};
use crate::assets::{AssetError, FontFace, Sprite};
use crate::game::Viewport;

/// Built-in font size for debug text, in logical pixels
const DEBUG_FONT_SIZE: f32 = 24.0;
/// Effects that can overlap before the oldest is cut off
const MAX_LIVE_EFFECTS: usize = 16;

/// The macroquad engine
///
/// Requires a live macroquad context, so it can only be used from inside the
/// `#[macroquad::main]` entry point.
pub struct Macroquad {
    effects: LiveSounds<Sound>,
}

impl Default for Macroquad {
    fn default() -> Self {
        Self {
            effects: LiveSounds::new(MAX_LIVE_EFFECTS),
        }
    }
}

impl Backend for Macroquad {
    type Image = Texture2D;
    type Font = Font;
    type Music = Sound;

    fn upload_image(&self, image: &::image::RgbaImage) -> Texture2D {
        // Dimensions were checked against u16::MAX by the store
        let texture = Texture2D::from_rgba8(image.width() as u16, image.height() as u16, image.as_raw());
        texture.set_filter(FilterMode::Nearest);
        texture
    }

    fn load_font(&self, name: &str, bytes: &[u8]) -> Result<Font, AssetError> {
        load_ttf_font_from_bytes(bytes).map_err(|e| AssetError::Decode {
            kind: "font",
            name: name.to_string(),
            reason: e.to_string(),
        })
    }

    fn load_music(&self, name: &str, bytes: &[u8]) -> Result<Sound, AssetError> {
        pollster::block_on(load_sound_from_bytes(bytes)).map_err(|e| AssetError::Decode {
            kind: "music",
            name: name.to_string(),
            reason: e.to_string(),
        })
    }

    fn play_music(&self, music: &Sound, volume: f32) {
        play_sound(music, PlaySoundParams { looped: true, volume });
    }

    fn play_sound_effect(&self, bytes: &[u8]) -> Result<(), AssetError> {
        let sound = pollster::block_on(load_sound_from_bytes(bytes))
            .map_err(|e| AssetError::Playback(e.to_string()))?;
        play_sound_once(&sound);
        self.effects.keep(sound);
        Ok(())
    }
}

/// Draws into the window through a letterbox viewport
pub struct ScreenCanvas {
    viewport: Viewport,
    logical_size: (f32, f32),
}

impl ScreenCanvas {
    pub fn new(viewport: Viewport, logical_size: (f32, f32)) -> Self {
        Self { viewport, logical_size }
    }
}

impl Canvas<Macroquad> for ScreenCanvas {
    fn fill(&mut self, color: Color) {
        let (x, y) = self.viewport.to_screen(0.0, 0.0);
        let (w, h) = self.logical_size;
        draw_rectangle(x, y, w * self.viewport.scale, h * self.viewport.scale, color);
    }

    fn draw_image(&mut self, sprite: &Sprite<Texture2D>, x: f32, y: f32, scale: f32) {
        let (sx, sy) = self.viewport.to_screen(x, y);
        let size = scale * self.viewport.scale;
        draw_texture_ex(
            &sprite.handle,
            sx,
            sy,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(sprite.width as f32 * size, sprite.height as f32 * size)),
                ..Default::default()
            },
        );
    }

    fn draw_text(&mut self, text: &str, face: &FontFace<Font>, x: f32, y: f32) {
        // macroquad positions text by its baseline, not its top
        let (sx, sy) = self.viewport.to_screen(x, y + face.size as f32);
        draw_text_ex(
            text,
            sx,
            sy,
            TextParams {
                font: Some(&face.font),
                font_size: face.size,
                font_scale: self.viewport.scale,
                color: WHITE,
                ..Default::default()
            },
        );
    }

    fn debug_print(&mut self, text: &str, x: f32, y: f32) {
        let (sx, sy) = self.viewport.to_screen(x, y + DEBUG_FONT_SIZE);
        draw_text(text, sx, sy, DEBUG_FONT_SIZE * self.viewport.scale, WHITE);
    }
}
