use crate::assets::AssetError;
use crate::scene::SceneId;

/// Errors surfacing from the frame loop
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// The player asked to quit; not a failure
    #[error("exit requested")]
    ExitRequested,
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error("scene {0:?} is already registered")]
    DuplicateScene(SceneId),
    #[error("no scene registered with id {0:?}")]
    UnknownScene(SceneId),
}
