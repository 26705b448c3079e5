//! Configuration constants and default values.
//!
//! This module contains all application constants including file names,
//! interval limits, icon formats, and the user-facing strings.

// === Files ===

/// Config file name, resolved against the working directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Fallback icon directory, resolved next to the executable.
pub const FALLBACK_ICON_DIR: &str = "Icons";

// === Interval ===

/// Default carousel interval in milliseconds.
pub const DEFAULT_INTERVAL_MS: u32 = 3_000;

/// Minimum carousel interval in milliseconds (0.05 s).
pub const MIN_INTERVAL_MS: u32 = 50;

/// Maximum carousel interval in milliseconds (one hour).
pub const MAX_INTERVAL_MS: u32 = 3_600_000;

// === Icons ===

/// Recognised icon extensions, lowercase, in fallback scan order.
pub const ICON_EXTENSIONS: [&str; 5] = ["ico", "png", "jpg", "jpeg", "bmp"];

/// Extension loaded directly as a native icon resource.
pub const NATIVE_ICON_EXTENSION: &str = "ico";

/// Edge length of the small tray icon in pixels.
pub const SMALL_ICON_SIZE: u32 = 16;

/// Minimum number of icons before the carousel can run.
pub const MIN_CYCLE_ICONS: usize = 2;

// === Process ===

/// Name of the process-wide single-instance mutex.
pub const INSTANCE_MUTEX_NAME: &str = "IconCarousel_SingleInstance";

/// Application display name.
pub const APP_NAME: &str = "Icon Carousel";

/// Application version from Cargo.toml
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tray tooltip text.
pub const TRAY_TOOLTIP: &str = "Icon Carousel";

/// Balloon notification display time in milliseconds.
pub const BALLOON_TIMEOUT_MS: u32 = 2_000;
