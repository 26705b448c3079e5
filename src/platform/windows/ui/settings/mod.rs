//! Settings window for Windows.

mod file_picker;
pub mod window;

pub use window::run_settings_dialog;
