use super::Category;

/// Error type for asset loading and playback
///
/// Every variant is fatal at the top level: the frame loop never starts, or
/// stops, when one surfaces.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("missing asset {category}/{name}")]
    Missing { category: Category, name: String },
    #[error("asset name {category}/{name} is not valid UTF-8")]
    InvalidName { category: Category, name: String },
    #[error("failed to decode image {name}: {source}")]
    Image {
        name: String,
        #[source]
        source: image::ImageError,
    },
    #[error("image {name} is {width}x{height}, too large for a texture")]
    ImageTooLarge { name: String, width: u32, height: u32 },
    #[error("failed to parse {name}: {source}")]
    Json {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to decode {kind} {name}: {reason}")]
    Decode {
        kind: &'static str,
        name: String,
        reason: String,
    },
    #[error("failed to play sound effect: {0}")]
    Playback(String),
}
