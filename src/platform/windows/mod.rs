//! Windows-specific implementation using the Win32 API.
//!
//! This module contains all Windows-specific code:
//! - FFI helpers (UTF-16 strings)
//! - Application context and single-instance mutex
//! - UI components (tray icon, settings window, message boxes)

pub mod app;
pub mod ffi;
pub mod ui;

// Re-export commonly used items
pub use app::*;
pub use ui::*;
