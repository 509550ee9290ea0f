//! The placeholder screen

use log::debug;
use macroquad::color::BLACK;

use crate::assets::FontFace;
use crate::backend::{Backend, Canvas};
use crate::config::{SCREEN_WIDTH, TITLE_FONT_SIZE};
use crate::error::GameError;
use crate::input::{Action, Input};
use crate::scene::{Scene, SceneContext, SceneId};

/// Image shown at the top of the screen
const MASCOT_IMAGE: &str = "mascot.png";
/// Data file shown in the debug lines
const SAMPLE_DATA: &str = "sample.json";

/// Single static screen: image, some debug text and a line in the bundled font
pub struct MainScene<B: Backend> {
    font: Option<FontFace<B::Font>>,
    bgm_volume: f32,
}

impl<B: Backend> MainScene<B> {
    pub fn new(bgm_volume: f32) -> Self {
        Self {
            font: None,
            bgm_volume,
        }
    }
}

impl<B: Backend> Scene<B> for MainScene<B> {
    fn id(&self) -> SceneId {
        SceneId::MAIN
    }

    fn init(&mut self, ctx: &SceneContext<'_, B>) {
        debug!("Main scene init (lang {:?}, state {})", ctx.lang, ctx.state);
        self.font = Some(ctx.assets.get_font(TITLE_FONT_SIZE).clone());

        if let Some(bgm) = ctx.assets.first_music() {
            ctx.assets.backend().play_music(bgm, self.bgm_volume);
        }
    }

    fn update(&mut self, ctx: &SceneContext<'_, B>, input: &dyn Input) -> Result<(), GameError> {
        if input.action_pressed(Action::PlaySound) {
            if let Some(se) = ctx.assets.first_sound_effect().filter(|se| !se.is_empty()) {
                ctx.assets.play_sound_effect(se)?;
            }
        }
        if input.action_pressed(Action::Exit) {
            return Err(GameError::ExitRequested);
        }
        Ok(())
    }

    fn draw(&self, ctx: &SceneContext<'_, B>, canvas: &mut dyn Canvas<B>) {
        canvas.fill(BLACK);

        if let Some(img) = ctx.assets.get_image(MASCOT_IMAGE) {
            // Drawn at 2x, so offsetting by the unscaled width centres it
            let x = SCREEN_WIDTH / 2.0 - img.width as f32;
            canvas.draw_image(img, x, 120.0, 2.0);
        }

        canvas.debug_print("Hello, mobile-game-template", 40.0, 420.0);
        canvas.debug_print("Assets ready: image / font / json / audio", 40.0, 460.0);
        canvas.debug_print("Press SPACE for SE, ESC to exit", 40.0, 500.0);

        if let Some(sample) = ctx.assets.get_json(SAMPLE_DATA) {
            canvas.debug_print(&format!("JSON: {} v{}", sample.title, sample.version), 40.0, 540.0);
        }

        if let Some(font) = &self.font {
            canvas.draw_text("Hello macroquad", font, 40.0, 610.0);
        }
    }
}
