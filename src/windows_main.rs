//! Windows-specific entry point.
//!
//! Creates a hidden window that owns the tray icon and the carousel timer,
//! then routes its messages to the [`AppContext`].

use anyhow::Context;
use windows::core::w;
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, DispatchMessageW, GetMessageW,
    GetWindowLongPtrW, RegisterClassW, SetWindowLongPtrW, TranslateMessage, CW_USEDEFAULT,
    GWLP_USERDATA, MSG, WINDOW_EX_STYLE, WM_COMMAND, WM_CONTEXTMENU, WM_ENDSESSION, WM_TIMER,
    WM_RBUTTONUP, WNDCLASSW, WS_OVERLAPPED,
};

use icon_carousel::default_icon_dir;
use icon_carousel::model::constants::INSTANCE_MUTEX_NAME;
use icon_carousel::platform::windows::app::{AppContext, SingleInstance};
use icon_carousel::platform::windows::ui::dialogs::show_alert;
use icon_carousel::platform::windows::ui::tray::{Win32Tray, TIMER_CAROUSEL, WM_TRAYICON};
use icon_carousel::session::{Alert, Command, Flow, TraySession};
use icon_carousel::storage::ConfigStore;

/// Main entry point for Windows.
pub fn run() -> anyhow::Result<()> {
    let _instance = match SingleInstance::acquire(INSTANCE_MUTEX_NAME)
        .context("failed to create the single-instance mutex")?
    {
        Some(guard) => guard,
        None => {
            tracing::warn!("Another instance is already running");
            show_alert(None, &Alert::AlreadyRunning);
            return Ok(());
        }
    };

    unsafe {
        let instance = GetModuleHandleW(None).context("GetModuleHandleW failed")?;
        let class_name = w!("IconCarouselTray");

        let wc = WNDCLASSW {
            lpfnWndProc: Some(wndproc),
            hInstance: instance.into(),
            lpszClassName: class_name,
            ..Default::default()
        };
        if RegisterClassW(&wc) == 0 {
            anyhow::bail!("failed to register the tray window class");
        }

        // Never shown: it only receives tray, timer and menu messages
        let hwnd = CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            class_name,
            w!("Icon Carousel"),
            WS_OVERLAPPED,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            0,
            0,
            None,
            None,
            Some(instance.into()),
            None,
        )
        .context("failed to create the tray window")?;

        let tray = match Win32Tray::install(hwnd) {
            Ok(tray) => tray,
            Err(e) => {
                let _ = DestroyWindow(hwnd);
                return Err(e).context("failed to add the tray icon");
            }
        };

        let session = TraySession::new(tray, ConfigStore::in_working_dir(), default_icon_dir());
        let context = Box::into_raw(Box::new(AppContext::new(session)));
        SetWindowLongPtrW(hwnd, GWLP_USERDATA, context as isize);

        // Message loop
        let mut msg = MSG::default();
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }

        // Cleanup: dropping the context removes the tray icon
        SetWindowLongPtrW(hwnd, GWLP_USERDATA, 0);
        drop(Box::from_raw(context));
        let _ = DestroyWindow(hwnd);
    }

    tracing::debug!("Message loop ended");
    Ok(())
}

unsafe fn app_context<'a>(hwnd: HWND) -> Option<&'a AppContext> {
    (GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *const AppContext).as_ref()
}

extern "system" fn wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        let Some(context) = app_context(hwnd) else {
            return DefWindowProcW(hwnd, msg, wparam, lparam);
        };

        match msg {
            WM_TIMER => {
                if wparam.0 == TIMER_CAROUSEL {
                    context.dispatch(Command::Tick);
                }
                LRESULT(0)
            }

            // Context menu commands
            WM_COMMAND => {
                let id = (wparam.0 & 0xFFFF) as u32;
                if let Some(command) = Command::from_menu_id(id) {
                    if context.dispatch(command) == Some(Flow::Exit) {
                        context.retire_tray();
                    }
                }
                LRESULT(0)
            }

            WM_ENDSESSION => {
                if wparam.0 != 0 {
                    tracing::info!("Session ending");
                    context.end_session();
                }
                LRESULT(0)
            }

            // System tray icon messages (event in the low word of lParam)
            msg if msg == WM_TRAYICON => {
                let event = (lparam.0 as u32) & 0xFFFF;
                if event == WM_RBUTTONUP || event == WM_CONTEXTMENU {
                    context.show_menu();
                }
                LRESULT(0)
            }

            _ => DefWindowProcW(hwnd, msg, wparam, lparam),
        }
    }
}
