//! Icon Carousel: cycles the system tray icon through a list of images.
//!
//! Everything outside `platform` is pure Rust with no FFI, so the carousel,
//! configuration and settings logic run as normal integration tests.

pub mod carousel;
pub mod error;
pub mod model;
pub mod platform;
pub mod session;
pub mod settings;
pub mod storage;

// Re-export the main types for convenience
pub use carousel::{IconCarousel, TrayIcon};
pub use error::{ConfigError, IconError};
pub use model::Configuration;
pub use session::{Command, TrayHost, TraySession};
pub use settings::SettingsEditor;
pub use storage::ConfigStore;

use std::path::PathBuf;

use model::constants::FALLBACK_ICON_DIR;

/// `Icons` directory next to the running executable.
///
/// Falls back to a working-directory-relative path if the executable
/// location is unknown.
pub fn default_icon_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(FALLBACK_ICON_DIR)))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_ICON_DIR))
}
