//! Build script to embed the bundled assets into the binary
//!
//! Scans the category directories under assets/ and generates a table of
//! `include_bytes!` entries, since Android and iOS builds can't enumerate
//! directories at runtime.

use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Category directories, in the same order as `assets::Category::ALL`
const CATEGORIES: [&str; 5] = ["images", "fonts", "se", "bgm", "data"];

fn main() {
    println!("cargo:rerun-if-changed=assets");

    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
    let out_path = PathBuf::from(env::var("OUT_DIR").unwrap()).join("bundle.rs");

    let mut table = String::new();
    table.push_str("pub static FILES: &[(&str, &str, &[u8])] = &[\n");

    for category in CATEGORIES {
        let dir = root.join(category);
        println!("cargo:rerun-if-changed={}", dir.display());

        if !dir.exists() {
            continue;
        }

        // Files only, subdirectories are not part of a category
        let mut files: Vec<_> = fs::read_dir(&dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .collect();

        files.sort_by_key(|e| e.file_name());

        for entry in files {
            let name = entry.file_name().to_string_lossy().to_string();
            let path = entry.path().canonicalize().unwrap();
            table.push_str(&format!(
                "    ({:?}, {:?}, include_bytes!({:?})),\n",
                category,
                name,
                path.to_string_lossy()
            ));
        }
    }

    table.push_str("];\n");

    let mut file = fs::File::create(out_path).unwrap();
    file.write_all(table.as_bytes()).unwrap();
}
