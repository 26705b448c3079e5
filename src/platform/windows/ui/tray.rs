//! System tray (notification area) icon for Windows.
//!
//! [`Win32Tray`] is the Windows [`TrayHost`]: it owns the notify icon, its
//! context menu and the carousel timer of the hidden tray window.

use std::time::Duration;

use windows::core::{Error, PCWSTR};
use windows::Win32::Foundation::{E_FAIL, HWND, LPARAM, POINT, WPARAM};
use windows::Win32::UI::Shell::{
    Shell_NotifyIconW, NIF_ICON, NIF_INFO, NIF_MESSAGE, NIF_TIP, NIIF_INFO, NIM_ADD, NIM_DELETE,
    NIM_MODIFY, NOTIFYICONDATAW,
};
use windows::Win32::UI::WindowsAndMessaging::{
    AppendMenuW, CreatePopupMenu, DestroyMenu, GetCursorPos, KillTimer, LoadIconW, PostMessageW,
    PostQuitMessage, SetForegroundWindow, SetTimer, TrackPopupMenu, HICON, HMENU, IDI_APPLICATION,
    MF_SEPARATOR, MF_STRING, TPM_BOTTOMALIGN, TPM_LEFTALIGN, TPM_RIGHTBUTTON, WM_NULL, WM_USER,
};

use super::dialogs::show_alert;
use super::icon::{create_icon, OwnedIcon};
use super::settings::window::run_settings_dialog;
use crate::carousel::TrayIcon;
use crate::error::IconError;
use crate::model::constants::{BALLOON_TIMEOUT_MS, TRAY_TOOLTIP};
use crate::model::Configuration;
use crate::platform::windows::ffi::{copy_to_buffer, to_wide};
use crate::session::{Alert, MenuEntry, Notice, TrayHost, TRAY_MENU};
use crate::settings::SettingsEditor;

// Custom message for tray icon events
pub const WM_TRAYICON: u32 = WM_USER + 1;

// Carousel timer ID
pub const TIMER_CAROUSEL: usize = 1;

// Tray icon ID
const TRAY_ICON_ID: u32 = 1;

/// Tray icon, menu and timer bound to one window.
pub struct Win32Tray {
    hwnd: HWND,
    menu: HMENU,
    icon: Option<OwnedIcon>,
    timer_active: bool,
    installed: bool,
}

impl Win32Tray {
    /// Add the tray icon (generic application icon) and build its menu.
    pub fn install(hwnd: HWND) -> windows::core::Result<Self> {
        let menu = build_menu()?;

        unsafe {
            let mut nid = notify_data(hwnd);
            nid.uFlags = NIF_ICON | NIF_MESSAGE | NIF_TIP;
            nid.uCallbackMessage = WM_TRAYICON;
            nid.hIcon = LoadIconW(None, IDI_APPLICATION)?;
            copy_to_buffer(&mut nid.szTip, TRAY_TOOLTIP);

            if !Shell_NotifyIconW(NIM_ADD, &nid).as_bool() {
                let _ = DestroyMenu(menu);
                return Err(Error::new(E_FAIL, "Shell_NotifyIconW(NIM_ADD) failed"));
            }
        }

        tracing::info!("Tray icon installed");
        Ok(Self {
            hwnd,
            menu,
            icon: None,
            timer_active: false,
            installed: true,
        })
    }

    /// Window and menu for [`show_context_menu`].
    pub fn menu_handles(&self) -> (HWND, HMENU) {
        (self.hwnd, self.menu)
    }

    /// Remove the tray icon and free its resources. Safe to call twice.
    pub fn remove(&mut self) {
        self.stop_timer();
        if !self.installed {
            return;
        }
        self.installed = false;

        unsafe {
            let nid = notify_data(self.hwnd);
            let _ = Shell_NotifyIconW(NIM_DELETE, &nid);
            let _ = DestroyMenu(self.menu);
        }
        // Only destroy the icon once the shell no longer shows it.
        self.icon = None;
        tracing::info!("Tray icon removed");
    }

    fn show_hicon(&self, hicon: HICON) -> bool {
        unsafe {
            let mut nid = notify_data(self.hwnd);
            nid.uFlags = NIF_ICON;
            nid.hIcon = hicon;
            Shell_NotifyIconW(NIM_MODIFY, &nid).as_bool()
        }
    }
}

impl Drop for Win32Tray {
    fn drop(&mut self) {
        self.remove();
    }
}

impl TrayHost for Win32Tray {
    fn set_icon(&mut self, icon: &TrayIcon) -> Result<(), IconError> {
        let owned = create_icon(icon)?;
        if !self.show_hicon(owned.handle()) {
            return Err(IconError::Platform {
                path: icon.path.clone(),
                message: "the shell rejected the icon".to_string(),
            });
        }
        // Previous icon is destroyed here, after the shell switched away from it.
        self.icon = Some(owned);
        Ok(())
    }

    fn set_default_icon(&mut self) {
        match unsafe { LoadIconW(None, IDI_APPLICATION) } {
            Ok(hicon) => {
                self.show_hicon(hicon);
                self.icon = None;
            }
            Err(e) => tracing::error!("Failed to load default icon: {}", e),
        }
    }

    fn start_timer(&mut self, interval: Duration) {
        let ms = u32::try_from(interval.as_millis()).unwrap_or(u32::MAX);
        let id = unsafe { SetTimer(Some(self.hwnd), TIMER_CAROUSEL, ms, None) };
        if id == 0 {
            tracing::error!("SetTimer failed");
            return;
        }
        self.timer_active = true;
    }

    fn stop_timer(&mut self) {
        if self.timer_active {
            unsafe {
                let _ = KillTimer(Some(self.hwnd), TIMER_CAROUSEL);
            }
            self.timer_active = false;
        }
    }

    fn notify(&mut self, notice: Notice) {
        unsafe {
            let mut nid = notify_data(self.hwnd);
            nid.uFlags = NIF_INFO;
            nid.dwInfoFlags = NIIF_INFO;
            nid.Anonymous.uTimeout = BALLOON_TIMEOUT_MS;
            copy_to_buffer(&mut nid.szInfoTitle, notice.title());
            copy_to_buffer(&mut nid.szInfo, notice.message());
            let _ = Shell_NotifyIconW(NIM_MODIFY, &nid);
        }
    }

    fn alert(&mut self, alert: &Alert) {
        show_alert(Some(self.hwnd), alert);
    }

    fn edit_settings(&mut self, editor: SettingsEditor) -> Option<Configuration> {
        run_settings_dialog(self.hwnd, editor)
    }

    fn quit(&mut self) {
        self.stop_timer();
        unsafe { PostQuitMessage(0) };
    }
}

/// Show the context menu at the cursor position.
pub fn show_context_menu((hwnd, menu): (HWND, HMENU)) {
    unsafe {
        let mut pt = POINT::default();
        let _ = GetCursorPos(&mut pt);

        // Required for menu to close when clicking outside
        let _ = SetForegroundWindow(hwnd);

        let _ = TrackPopupMenu(
            menu,
            TPM_BOTTOMALIGN | TPM_LEFTALIGN | TPM_RIGHTBUTTON,
            pt.x,
            pt.y,
            None, // nReserved - must be None/0
            hwnd,
            None,
        );

        let _ = PostMessageW(Some(hwnd), WM_NULL, WPARAM(0), LPARAM(0));
    }
}

fn build_menu() -> windows::core::Result<HMENU> {
    unsafe {
        let menu = CreatePopupMenu()?;
        for entry in TRAY_MENU {
            match entry {
                MenuEntry::Item { id, label, .. } => {
                    let label_wide = to_wide(label);
                    AppendMenuW(menu, MF_STRING, id as usize, PCWSTR(label_wide.as_ptr()))?;
                }
                MenuEntry::Separator => {
                    AppendMenuW(menu, MF_SEPARATOR, 0, PCWSTR::null())?;
                }
            }
        }
        Ok(menu)
    }
}

fn notify_data(hwnd: HWND) -> NOTIFYICONDATAW {
    NOTIFYICONDATAW {
        cbSize: std::mem::size_of::<NOTIFYICONDATAW>() as u32,
        hWnd: hwnd,
        uID: TRAY_ICON_ID,
        ..Default::default()
    }
}
