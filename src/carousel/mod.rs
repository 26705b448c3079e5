//! Icon carousel: resolution, state machine and icon preparation.
//!
//! - [`resolve`]: which files to cycle through
//! - [`engine`]: the cursor over them
//! - [`render`]: turning a file into tray-ready icon data

pub mod engine;
pub mod render;
pub mod resolve;

pub use engine::{IconCarousel, StartError};
pub use render::{prepare_icon, IconData, TrayIcon};
pub use resolve::{is_icon_file, resolve_icons, scan_icon_dir};
