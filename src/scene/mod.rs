//! Scene framework
//!
//! A scene is a unit of per-frame update/draw logic. The `Director` owns the
//! registered scenes, runs the current one and handles switches between them.
//!
//! Lifecycle: `init` once at registration, `start` each time the scene becomes
//! current, then `update`/`draw` every frame while it stays current.

mod director;
mod storage;

pub use director::Director;
pub use storage::Storage;

use serde::{Deserialize, Serialize};

use crate::assets::Assets;
use crate::backend::{Backend, Canvas};
use crate::error::GameError;
use crate::input::Input;

/// Stable scene identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SceneId(pub u32);

impl SceneId {
    pub const MAIN: SceneId = SceneId(0);
}

/// What the director should do after a scene's update
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneStatus {
    #[default]
    Running,
    /// Make another registered scene current
    Switch(SceneId),
}

/// Display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Lang {
    #[default]
    En,
    Ja,
}

/// Everything a scene may read during a lifecycle call
pub struct SceneContext<'a, B: Backend> {
    pub assets: &'a Assets<B>,
    pub lang: Lang,
    pub state: u32,
}

/// The lifecycle contract every scene implements
pub trait Scene<B: Backend> {
    fn id(&self) -> SceneId;

    /// Called once, when the scene is registered
    fn init(&mut self, ctx: &SceneContext<'_, B>);

    /// Called each time the scene becomes current
    fn start(&mut self, _ctx: &SceneContext<'_, B>) {}

    /// Called once per frame while current. An error stops the game.
    fn update(&mut self, ctx: &SceneContext<'_, B>, input: &dyn Input) -> Result<(), GameError>;

    fn draw(&self, ctx: &SceneContext<'_, B>, canvas: &mut dyn Canvas<B>);

    /// Checked by the director after every update
    fn status(&self) -> SceneStatus {
        SceneStatus::Running
    }
}
