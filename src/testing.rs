//! Test doubles: a recording backend, a recording canvas, scripted input and
//! a throwaway asset tree.

use std::cell::RefCell;

use macroquad::color::Color;
use tempfile::TempDir;

use crate::assets::{AssetError, FontFace, Sprite};
use crate::backend::{Backend, Canvas, LiveSounds};
use crate::input::{Action, Input};

/// Font file written by `write_asset_tree`
pub const TEST_FONT: &str = "test.ttf";

#[derive(Debug, Clone, PartialEq)]
pub struct FakeFont {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FakeMusic {
    pub name: String,
}

/// Effects the fake keeps alive at once
pub const FAKE_LIVE_EFFECTS: usize = 2;

/// Backend that records playback instead of producing sound
///
/// Empty fonts and music are undecodable, as are sound effects that don't
/// start with a `RIFF` header.
pub struct FakeBackend {
    played_effects: RefCell<Vec<Vec<u8>>>,
    live_effects: LiveSounds<Vec<u8>>,
    music_started: RefCell<Vec<(String, f32)>>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            played_effects: RefCell::default(),
            live_effects: LiveSounds::new(FAKE_LIVE_EFFECTS),
            music_started: RefCell::default(),
        }
    }
}

impl FakeBackend {
    pub fn played_effects(&self) -> Vec<Vec<u8>> {
        self.played_effects.borrow().clone()
    }

    /// Effect handles still held, oldest first
    pub fn live_effects(&self) -> Vec<Vec<u8>> {
        self.live_effects.held()
    }

    pub fn music_started(&self) -> Vec<(String, f32)> {
        self.music_started.borrow().clone()
    }
}

impl Backend for FakeBackend {
    type Image = (u32, u32);
    type Font = FakeFont;
    type Music = FakeMusic;

    fn upload_image(&self, image: &image::RgbaImage) -> (u32, u32) {
        image.dimensions()
    }

    fn load_font(&self, name: &str, bytes: &[u8]) -> Result<FakeFont, AssetError> {
        if bytes.is_empty() {
            return Err(AssetError::Decode {
                kind: "font",
                name: name.to_string(),
                reason: "empty".to_string(),
            });
        }
        Ok(FakeFont { name: name.to_string() })
    }

    fn load_music(&self, name: &str, bytes: &[u8]) -> Result<FakeMusic, AssetError> {
        if bytes.is_empty() {
            return Err(AssetError::Decode {
                kind: "music",
                name: name.to_string(),
                reason: "empty".to_string(),
            });
        }
        Ok(FakeMusic { name: name.to_string() })
    }

    fn play_music(&self, music: &FakeMusic, volume: f32) {
        self.music_started.borrow_mut().push((music.name.clone(), volume));
    }

    fn play_sound_effect(&self, bytes: &[u8]) -> Result<(), AssetError> {
        if !bytes.starts_with(b"RIFF") {
            return Err(AssetError::Playback("no RIFF header".to_string()));
        }
        self.played_effects.borrow_mut().push(bytes.to_vec());
        self.live_effects.keep(bytes.to_vec());
        Ok(())
    }
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Fill(Color),
    Image { size: (u32, u32), x: f32, y: f32, scale: f32 },
    Text { text: String, size: u16, x: f32, y: f32 },
    Debug { text: String, x: f32, y: f32 },
}

#[derive(Debug, Default)]
pub struct FakeCanvas {
    pub ops: Vec<DrawOp>,
}

impl FakeCanvas {
    /// Debug strings in draw order
    pub fn debug_lines(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Debug { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas<FakeBackend> for FakeCanvas {
    fn fill(&mut self, color: Color) {
        self.ops.push(DrawOp::Fill(color));
    }

    fn draw_image(&mut self, sprite: &Sprite<(u32, u32)>, x: f32, y: f32, scale: f32) {
        self.ops.push(DrawOp::Image { size: sprite.handle, x, y, scale });
    }

    fn draw_text(&mut self, text: &str, face: &FontFace<FakeFont>, x: f32, y: f32) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            size: face.size,
            x,
            y,
        });
    }

    fn debug_print(&mut self, text: &str, x: f32, y: f32) {
        self.ops.push(DrawOp::Debug { text: text.to_string(), x, y });
    }
}

/// Input with a fixed set of actions pressed this frame
#[derive(Debug, Default)]
pub struct ScriptedInput {
    pressed: Vec<Action>,
}

impl ScriptedInput {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn pressing(actions: &[Action]) -> Self {
        Self { pressed: actions.to_vec() }
    }
}

impl Input for ScriptedInput {
    fn action_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }
}

fn png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([40, 110, 230, 255]));
    let mut bytes = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

/// Write a complete asset tree into a temp directory
///
/// images: mascot.png (8x4), tile.png (2x2), plus a nested file that must be ignored
/// fonts: test.ttf
/// se: a_click.wav, b_pop.wav
/// bgm: theme.wav
/// data: sample.json
pub fn write_asset_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    for sub in ["images/nested", "fonts", "se", "bgm", "data"] {
        std::fs::create_dir_all(root.join(sub)).unwrap();
    }

    std::fs::write(root.join("images/mascot.png"), png(8, 4)).unwrap();
    std::fs::write(root.join("images/tile.png"), png(2, 2)).unwrap();
    std::fs::write(root.join("images/nested/ignored.png"), png(1, 1)).unwrap();
    std::fs::write(root.join("fonts").join(TEST_FONT), b"font").unwrap();
    std::fs::write(root.join("se/b_pop.wav"), b"RIFFpop").unwrap();
    std::fs::write(root.join("se/a_click.wav"), b"RIFFclick").unwrap();
    std::fs::write(root.join("bgm/theme.wav"), b"RIFFtheme").unwrap();
    std::fs::write(
        root.join("data/sample.json"),
        br#"{"title":"Sample","version":"1.0"}"#,
    )
    .unwrap();

    dir
}
