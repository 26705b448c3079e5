//! Modal message boxes for Windows.
//!
//! Shows session alerts (about, errors, notices) with `MessageBoxW`.

use windows::core::PCWSTR;
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{
    MessageBoxW, MB_ICONERROR, MB_ICONINFORMATION, MB_OK, MB_SETFOREGROUND,
};

use crate::platform::windows::ffi::to_wide;
use crate::session::{Alert, AlertLevel};

/// Show `alert` and wait for the user to dismiss it.
pub fn show_alert(owner: Option<HWND>, alert: &Alert) {
    let icon = match alert.level() {
        AlertLevel::Info => MB_ICONINFORMATION,
        AlertLevel::Error => MB_ICONERROR,
    };

    let title_wide = to_wide(&alert.title());
    let message_wide = to_wide(&alert.message());

    unsafe {
        MessageBoxW(
            owner,
            PCWSTR(message_wide.as_ptr()),
            PCWSTR(title_wide.as_ptr()),
            MB_OK | MB_SETFOREGROUND | icon,
        );
    }
}
