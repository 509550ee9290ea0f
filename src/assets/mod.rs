//! Bundled asset loading
//!
//! Everything under `assets/` is grouped into five categories:
//!
//! ```text
//! assets/
//! ├── images/   # PNG/JPEG/BMP, keyed by file name
//! ├── fonts/    # a single TrueType file
//! ├── se/       # sound effects, kept as raw bytes
//! ├── bgm/      # background music, decoded at load
//! └── data/     # JSON documents, keyed by file name
//! ```
//!
//! `build.rs` embeds the tree into the binary. The store loads it eagerly at
//! startup and is read-only afterwards.

mod bundle;
mod error;
mod store;

pub use bundle::{AssetSource, Category, Directory, Embedded};
pub use error::AssetError;
pub use store::{Assets, FontFace, Sprite};
