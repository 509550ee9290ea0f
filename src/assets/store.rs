//! Asset Store - eager, read-only collection of decoded game resources
//!
//! Loaded once before the frame loop starts. Any I/O or decode error aborts
//! the load; there's no partial store.

use std::collections::HashMap;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::{AssetError, AssetSource, Category};
use crate::backend::Backend;
use crate::config::{DEFAULT_FONT_SIZE, FONT_SIZES};

/// Record stored in `assets/data/*.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleJson {
    pub title: String,
    pub version: String,
}

/// An uploaded image with its pixel size
#[derive(Debug, Clone)]
pub struct Sprite<I> {
    pub handle: I,
    pub width: u32,
    pub height: u32,
}

/// A font at a fixed size
#[derive(Debug, Clone)]
pub struct FontFace<F> {
    pub font: F,
    pub size: u16,
}

/// All bundled assets, decoded
pub struct Assets<B: Backend> {
    backend: B,
    /// Keyed by file name
    images: HashMap<String, Sprite<B::Image>>,
    /// Keyed by font size
    fonts: HashMap<u16, FontFace<B::Font>>,
    /// Returned for unregistered sizes
    default_font: FontFace<B::Font>,
    /// Raw encoded bytes, decoded on each play
    sound_effects: Vec<Vec<u8>>,
    music: Vec<B::Music>,
    /// Keyed by file name
    data: HashMap<String, SampleJson>,
}

impl<B: Backend> Assets<B> {
    /// Load every category from `source`
    pub fn load(source: &dyn AssetSource, backend: B, font_file: &str) -> Result<Self, AssetError> {
        info!("Loading assets from {}", source.describe());

        let images = load_images(source, &backend)?;
        let (fonts, default_font) = load_fonts(source, &backend, font_file)?;
        let sound_effects = load_sound_effects(source)?;
        let music = load_music(source, &backend)?;
        let data = load_data(source)?;

        Ok(Self {
            backend,
            images,
            fonts,
            default_font,
            sound_effects,
            music,
            data,
        })
    }

    /// Get an image by file name
    pub fn get_image(&self, name: &str) -> Option<&Sprite<B::Image>> {
        self.images.get(name)
    }

    /// Get a font face by size, falling back to the default size
    pub fn get_font(&self, size: u16) -> &FontFace<B::Font> {
        self.fonts.get(&size).unwrap_or(&self.default_font)
    }

    /// Get a parsed JSON record by file name
    pub fn get_json(&self, name: &str) -> Option<&SampleJson> {
        self.data.get(name)
    }

    pub fn first_sound_effect(&self) -> Option<&[u8]> {
        self.sound_effects.first().map(|b| b.as_slice())
    }

    pub fn first_music(&self) -> Option<&B::Music> {
        self.music.first()
    }

    /// Decode and play a sound effect right away
    pub fn play_sound_effect(&self, bytes: &[u8]) -> Result<(), AssetError> {
        self.backend.play_sound_effect(bytes)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Loaded image names, sorted
    pub fn image_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.images.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Loaded JSON names, sorted
    pub fn json_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.data.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    pub fn sound_effect_count(&self) -> usize {
        self.sound_effects.len()
    }

    pub fn music_count(&self) -> usize {
        self.music.len()
    }
}

fn load_images<B: Backend>(
    source: &dyn AssetSource,
    backend: &B,
) -> Result<HashMap<String, Sprite<B::Image>>, AssetError> {
    let mut images = HashMap::new();

    for name in source.list(Category::Images)? {
        let bytes = source.read(Category::Images, &name)?;
        let rgba = decode_rgba(&name, &bytes)?;
        let sprite = Sprite {
            handle: backend.upload_image(&rgba),
            width: rgba.width(),
            height: rgba.height(),
        };
        debug!("image {} ({}x{})", name, sprite.width, sprite.height);
        images.insert(name, sprite);
    }

    Ok(images)
}

/// Decode an encoded image to RGBA8, rejecting sizes a texture can't hold
fn decode_rgba(name: &str, bytes: &[u8]) -> Result<image::RgbaImage, AssetError> {
    let rgba = image::load_from_memory(bytes)
        .map_err(|source| AssetError::Image {
            name: name.to_string(),
            source,
        })?
        .to_rgba8();

    let (width, height) = rgba.dimensions();
    if width > u16::MAX as u32 || height > u16::MAX as u32 {
        return Err(AssetError::ImageTooLarge {
            name: name.to_string(),
            width,
            height,
        });
    }

    Ok(rgba)
}

type FontTable<F> = (HashMap<u16, FontFace<F>>, FontFace<F>);

fn load_fonts<B: Backend>(
    source: &dyn AssetSource,
    backend: &B,
    font_file: &str,
) -> Result<FontTable<B::Font>, AssetError> {
    let bytes = source.read(Category::Fonts, font_file)?;
    let font = backend.load_font(font_file, &bytes)?;
    debug!("font {} at sizes {:?}", font_file, FONT_SIZES);

    let fonts: HashMap<u16, FontFace<B::Font>> = FONT_SIZES
        .iter()
        .map(|&size| (size, FontFace { font: font.clone(), size }))
        .collect();
    let default_font = FontFace {
        font,
        size: DEFAULT_FONT_SIZE,
    };

    Ok((fonts, default_font))
}

fn load_sound_effects(source: &dyn AssetSource) -> Result<Vec<Vec<u8>>, AssetError> {
    source
        .list(Category::SoundEffects)?
        .iter()
        .map(|name| {
            debug!("sound effect {}", name);
            source
                .read(Category::SoundEffects, name)
                .map(|bytes| bytes.into_owned())
        })
        .collect()
}

fn load_music<B: Backend>(source: &dyn AssetSource, backend: &B) -> Result<Vec<B::Music>, AssetError> {
    let mut music = Vec::new();

    for name in source.list(Category::Music)? {
        let bytes = source.read(Category::Music, &name)?;
        music.push(backend.load_music(&name, &bytes)?);
        debug!("music {}", name);
    }

    Ok(music)
}

fn load_data(source: &dyn AssetSource) -> Result<HashMap<String, SampleJson>, AssetError> {
    let mut data = HashMap::new();

    for name in source.list(Category::Data)? {
        let bytes = source.read(Category::Data, &name)?;
        let record: SampleJson = serde_json::from_slice(&bytes).map_err(|source| AssetError::Json {
            name: name.clone(),
            source,
        })?;
        debug!("data {} = {:?}", name, record);
        data.insert(name, record);
    }

    Ok(data)
}
