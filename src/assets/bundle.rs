//! Asset sources
//!
//! `Embedded` serves the table generated by `build.rs`; `Directory` reads a
//! tree on disk (development override and tests). Both list files in sorted
//! order and skip subdirectories.

use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;

use super::AssetError;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/bundle.rs"));
}

/// The five bundled asset categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Images,
    Fonts,
    SoundEffects,
    Music,
    Data,
}

impl Category {
    #[allow(dead_code)]
    pub const ALL: [Category; 5] = [
        Category::Images,
        Category::Fonts,
        Category::SoundEffects,
        Category::Music,
        Category::Data,
    ];

    /// Directory name under `assets/`
    pub fn dir(&self) -> &'static str {
        match self {
            Category::Images => "images",
            Category::Fonts => "fonts",
            Category::SoundEffects => "se",
            Category::Music => "bgm",
            Category::Data => "data",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir())
    }
}

/// Somewhere bundled assets can be enumerated and read from
pub trait AssetSource {
    /// File names in a category, sorted
    fn list(&self, category: Category) -> Result<Vec<String>, AssetError>;

    /// Raw bytes of one file
    fn read(&self, category: Category, name: &str) -> Result<Cow<'_, [u8]>, AssetError>;

    /// Human-readable description for logging
    fn describe(&self) -> String;
}

/// Assets compiled into the binary by `build.rs`
#[derive(Debug, Clone, Copy, Default)]
pub struct Embedded;

impl Embedded {
    fn entries(category: Category) -> impl Iterator<Item = (&'static str, &'static [u8])> {
        generated::FILES
            .iter()
            .filter(move |(dir, _, _)| *dir == category.dir())
            .map(|(_, name, bytes)| (*name, *bytes))
    }
}

impl AssetSource for Embedded {
    fn list(&self, category: Category) -> Result<Vec<String>, AssetError> {
        // build.rs already sorted each category
        Ok(Self::entries(category).map(|(name, _)| name.to_string()).collect())
    }

    fn read(&self, category: Category, name: &str) -> Result<Cow<'_, [u8]>, AssetError> {
        Self::entries(category)
            .find(|(n, _)| *n == name)
            .map(|(_, bytes)| Cow::Borrowed(bytes))
            .ok_or_else(|| AssetError::Missing {
                category,
                name: name.to_string(),
            })
    }

    fn describe(&self) -> String {
        "embedded bundle".to_string()
    }
}

/// Assets read from a directory tree at runtime
#[derive(Debug, Clone)]
pub struct Directory {
    root: PathBuf,
}

impl Directory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn category_dir(&self, category: Category) -> PathBuf {
        self.root.join(category.dir())
    }
}

impl AssetSource for Directory {
    fn list(&self, category: Category) -> Result<Vec<String>, AssetError> {
        let dir = self.category_dir(category);
        let entries = std::fs::read_dir(&dir).map_err(|source| AssetError::Io {
            path: dir.display().to_string(),
            source,
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| AssetError::Io {
                path: dir.display().to_string(),
                source,
            })?;
            let path = entry.path();
            let metadata = std::fs::metadata(&path).map_err(|source| AssetError::Io {
                path: path.display().to_string(),
                source,
            })?;
            if !metadata.is_file() {
                continue;
            }
            let name = entry.file_name().into_string().map_err(|raw| AssetError::InvalidName {
                category,
                name: raw.to_string_lossy().into_owned(),
            })?;
            names.push(name);
        }

        // Sort by filename for consistent ordering
        names.sort();
        Ok(names)
    }

    fn read(&self, category: Category, name: &str) -> Result<Cow<'_, [u8]>, AssetError> {
        let path = self.category_dir(category).join(name);
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Cow::Owned(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(AssetError::Missing {
                category,
                name: name.to_string(),
            }),
            Err(source) => Err(AssetError::Io {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }
}
