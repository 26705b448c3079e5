//! Platform-specific implementations.
//!
//! Each platform submodule provides:
//! - FFI helpers
//! - A `TrayHost` implementation (tray icon, timer, notifications)
//! - Dialogs (settings, message boxes)
//! - The single-instance lock
//!
//! Only Windows is implemented; on other targets this module is empty and
//! the library is limited to the portable core.

#[cfg(target_os = "windows")]
pub mod windows;

// Re-export the current platform's modules for convenience
#[cfg(target_os = "windows")]
pub use windows::*;
