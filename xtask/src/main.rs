//! Build automation tasks for mobile-game-template
//!
//! Usage:
//!   cargo xtask build-android      # Build an APK with cargo-quad-apk
//!   cargo xtask build-ios          # Build an .app bundle for device or simulator
//!   cargo xtask package-desktop    # Native release build for the host platform

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::Command;

const APP_NAME: &str = "mobile-game-template";
const BUNDLE_ID: &str = "com.example.mobilegametemplate";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for mobile-game-template")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an Android APK (requires cargo-quad-apk and the Android SDK/NDK)
    BuildAndroid {
        /// Build in debug mode instead of release
        #[arg(long)]
        debug: bool,
    },
    /// Build an iOS .app bundle
    BuildIos {
        /// Target the simulator instead of a device
        #[arg(long)]
        simulator: bool,
    },
    /// Build a native release folder for the host platform
    PackageDesktop,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::BuildAndroid { debug } => build_android(debug),
        Commands::BuildIos { simulator } => build_ios(simulator),
        Commands::PackageDesktop => package_desktop(),
    }
}

/// Get the project root directory
fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask must live inside the workspace")
}

/// Run a command and check for success
fn run_cmd(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("Failed to execute command")?;
    if !status.success() {
        anyhow::bail!("Command failed with status: {}", status);
    }
    Ok(())
}

/// Build an APK via cargo-quad-apk (reads [package.metadata.android])
fn build_android(debug: bool) -> Result<()> {
    let root = project_root()?;

    println!("Building Android APK...");
    let mut cmd = Command::new("cargo");
    cmd.current_dir(&root).args(["quad-apk", "build"]);
    if !debug {
        cmd.arg("--release");
    }
    run_cmd(&mut cmd).context("cargo quad-apk failed (is cargo-quad-apk installed?)")?;

    let profile = if debug { "debug" } else { "release" };
    println!("APK ready: target/android-artifacts/{}/apk/", profile);
    Ok(())
}

/// Minimal Info.plist for a fullscreen portrait game
fn info_plist() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>CFBundleExecutable</key>
    <string>{name}</string>
    <key>CFBundleIdentifier</key>
    <string>{id}</string>
    <key>CFBundleName</key>
    <string>{name}</string>
    <key>CFBundleVersion</key>
    <string>1</string>
    <key>CFBundleShortVersionString</key>
    <string>1.0</string>
    <key>UIRequiresFullScreen</key>
    <true/>
    <key>UIStatusBarHidden</key>
    <true/>
    <key>UISupportedInterfaceOrientations</key>
    <array>
        <string>UIInterfaceOrientationPortrait</string>
    </array>
    <key>UILaunchStoryboardName</key>
    <string></string>
</dict>
</plist>
"#,
        name = APP_NAME,
        id = BUNDLE_ID
    )
}

/// Build an iOS .app bundle (assets are embedded, so only the binary and plist go in)
fn build_ios(simulator: bool) -> Result<()> {
    let root = project_root()?;
    let target = if simulator {
        "aarch64-apple-ios-sim"
    } else {
        "aarch64-apple-ios"
    };

    println!("Building for {}...", target);
    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release", "--target", target]),
    )?;

    let bundle = root.join(format!("dist/ios/{}.app", APP_NAME));
    if bundle.exists() {
        std::fs::remove_dir_all(&bundle)?;
    }
    std::fs::create_dir_all(&bundle)?;

    std::fs::copy(
        root.join(format!("target/{}/release/{}", target, APP_NAME)),
        bundle.join(APP_NAME),
    )
    .context("Failed to copy iOS binary")?;
    std::fs::write(bundle.join("Info.plist"), info_plist())?;

    println!("iOS bundle ready: dist/ios/{}.app", APP_NAME);
    if !simulator {
        println!("Note: sign the bundle with codesign before installing on a device");
    }
    Ok(())
}

/// Build a native release folder for the host platform
fn package_desktop() -> Result<()> {
    let root = project_root()?;
    let platform = if cfg!(target_os = "windows") {
        "windows"
    } else if cfg!(target_os = "macos") {
        "macos"
    } else {
        "linux"
    };

    let dist = root.join(format!("dist/desktop/{}", platform));

    println!("Building native release for {}...", platform);

    // Clean and create dist folder
    if dist.exists() {
        std::fs::remove_dir_all(&dist)?;
    }
    std::fs::create_dir_all(&dist)?;

    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release"]),
    )?;

    let binary_name = if platform == "windows" {
        format!("{}.exe", APP_NAME)
    } else {
        APP_NAME.to_string()
    };

    std::fs::copy(
        root.join(format!("target/release/{}", binary_name)),
        dist.join(&binary_name),
    )?;

    // Optional settings file travels with the binary
    let settings = root.join("settings.ron");
    if settings.exists() {
        std::fs::copy(&settings, dist.join("settings.ron"))?;
    }

    println!("Desktop build complete: dist/desktop/{}/", platform);
    Ok(())
}
