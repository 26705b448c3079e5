//! Settings window for Windows.
//!
//! A modal window over a [`SettingsEditor`]: icon list with add, remove and
//! reorder buttons, an interval field and the auto-start checkbox. OK hands
//! back the edited configuration; Cancel or closing the window discards it.

use std::cell::{Cell, RefCell};
use std::ffi::c_void;

use windows::core::{w, PCWSTR};
use windows::Win32::Foundation::{HINSTANCE, HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::Graphics::Gdi::{GetStockObject, HBRUSH, DEFAULT_GUI_FONT, WHITE_BRUSH};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::Input::KeyboardAndMouse::EnableWindow;
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, DispatchMessageW, GetMessageW,
    GetWindowLongPtrW, GetWindowTextW, IsDialogMessageW, LoadCursorW, PostQuitMessage,
    RegisterClassW, SendMessageW, SetForegroundWindow, SetWindowLongPtrW, ShowWindow,
    TranslateMessage, CREATESTRUCTW, CS_HREDRAW, CS_VREDRAW, CW_USEDEFAULT, GWLP_USERDATA, HMENU,
    IDC_ARROW, MSG, SW_SHOW, WINDOW_EX_STYLE, WINDOW_STYLE, WM_CLOSE, WM_COMMAND, WM_CREATE,
    WM_DESTROY, WM_NCCREATE, WM_SETFONT, WNDCLASSW, WS_BORDER, WS_CAPTION, WS_CHILD, WS_HSCROLL,
    WS_OVERLAPPED, WS_SYSMENU, WS_TABSTOP, WS_VISIBLE, WS_VSCROLL,
};

use super::file_picker::pick_icon_files;
use crate::model::Configuration;
use crate::platform::windows::ffi::to_wide;
use crate::settings::{entry_label, SettingsEditor};

// Control IDs (OK/Cancel use IDOK/IDCANCEL so Enter and Esc work)
const ID_OK: i32 = 1;
const ID_CANCEL: i32 = 2;
const ID_ICON_LIST: i32 = 101;
const ID_ADD: i32 = 102;
const ID_REMOVE: i32 = 103;
const ID_MOVE_UP: i32 = 104;
const ID_MOVE_DOWN: i32 = 105;
const ID_INTERVAL: i32 = 106;
const ID_AUTO_START: i32 = 107;

// ListBox messages and styles
const LB_ADDSTRING: u32 = 0x0180;
const LB_RESETCONTENT: u32 = 0x0184;
const LB_SETCURSEL: u32 = 0x0186;
const LB_GETCURSEL: u32 = 0x0188;
const LBN_SELCHANGE: u32 = 1;
const LBS_NOTIFY: u32 = 0x0001;
const LBS_NOINTEGRALHEIGHT: u32 = 0x0100;

// Button messages and styles
const BM_GETCHECK: u32 = 0x00F0;
const BM_SETCHECK: u32 = 0x00F1;
const BST_CHECKED: usize = 1;
const BS_DEFPUSHBUTTON: u32 = 0x0001;
const BS_AUTOCHECKBOX: u32 = 0x0003;

// Edit messages and styles
const EM_SETLIMITTEXT: u32 = 0x00C5;
const ES_NUMBER: u32 = 0x2000;
const INTERVAL_MAX_DIGITS: usize = 7;

// Window dimensions
const WINDOW_WIDTH: i32 = 500;
const WINDOW_HEIGHT: i32 = 400;

// Layout constants
const MARGIN: i32 = 12;
const LIST_WIDTH: i32 = 350;
const LIST_HEIGHT: i32 = 160;
const BUTTON_WIDTH: i32 = 100;
const BUTTON_HEIGHT: i32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Pending,
    Accepted,
}

#[derive(Default)]
struct Controls {
    list: HWND,
    interval: HWND,
    auto_start: HWND,
}

struct DialogState {
    editor: SettingsEditor,
    controls: Controls,
    outcome: Outcome,
}

/// Shared between the modal loop and the window procedure.
struct Dialog {
    state: RefCell<DialogState>,
    closed: Cell<bool>,
}

/// Run the settings window modally over `parent`.
///
/// Returns the edited configuration if the user pressed OK.
pub fn run_settings_dialog(parent: HWND, editor: SettingsEditor) -> Option<Configuration> {
    let dialog = Box::new(Dialog {
        state: RefCell::new(DialogState {
            editor,
            controls: Controls::default(),
            outcome: Outcome::Pending,
        }),
        closed: Cell::new(false),
    });

    unsafe {
        let class_name = w!("IconCarouselSettings");
        let hinstance = GetModuleHandleW(None).unwrap_or_default();

        let wc = WNDCLASSW {
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(settings_wnd_proc),
            hInstance: hinstance.into(),
            hCursor: LoadCursorW(None, IDC_ARROW).unwrap_or_default(),
            hbrBackground: HBRUSH(GetStockObject(WHITE_BRUSH).0),
            lpszClassName: class_name,
            ..Default::default()
        };
        // Fails harmlessly when the class is already registered
        let _ = RegisterClassW(&wc);

        let hwnd = CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            class_name,
            w!("Icon Carousel Settings"),
            WS_OVERLAPPED | WS_CAPTION | WS_SYSMENU,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            WINDOW_WIDTH,
            WINDOW_HEIGHT,
            Some(parent),
            None,
            Some(hinstance.into()),
            Some(&*dialog as *const Dialog as *const c_void),
        );

        let hwnd = match hwnd {
            Ok(h) => h,
            Err(e) => {
                tracing::error!("Failed to create settings window: {}", e);
                return None;
            }
        };

        // Disable parent window (modal behavior)
        let _ = EnableWindow(parent, false);
        let _ = ShowWindow(hwnd, SW_SHOW);
        let _ = SetForegroundWindow(hwnd);

        // Message loop for the settings window
        let mut msg = MSG::default();
        while !dialog.closed.get() {
            let status = GetMessageW(&mut msg, None, 0, 0).0;
            if status == 0 || status == -1 {
                // WM_QUIT belongs to the application loop: hand it back
                if status == 0 {
                    PostQuitMessage(msg.wParam.0 as i32);
                }
                let _ = DestroyWindow(hwnd);
                break;
            }
            if !IsDialogMessageW(hwnd, &msg).as_bool() {
                let _ = TranslateMessage(&msg);
                DispatchMessageW(&msg);
            }
        }

        let _ = EnableWindow(parent, true);
    }

    let state = dialog.state.into_inner();
    match state.outcome {
        Outcome::Accepted => Some(state.editor.accept()),
        Outcome::Pending => None,
    }
}

unsafe fn dialog_from_window<'a>(hwnd: HWND) -> Option<&'a Dialog> {
    (GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *const Dialog).as_ref()
}

unsafe extern "system" fn settings_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_NCCREATE => {
            let create = &*(lparam.0 as *const CREATESTRUCTW);
            SetWindowLongPtrW(hwnd, GWLP_USERDATA, create.lpCreateParams as isize);
            DefWindowProcW(hwnd, msg, wparam, lparam)
        }

        WM_CREATE => {
            if let Some(dialog) = dialog_from_window(hwnd) {
                if let Ok(mut state) = dialog.state.try_borrow_mut() {
                    create_controls(hwnd, &mut state);
                }
            }
            LRESULT(0)
        }

        WM_COMMAND => {
            let control_id = (wparam.0 & 0xFFFF) as i32;
            let notification = ((wparam.0 >> 16) & 0xFFFF) as u32;
            let close = match dialog_from_window(hwnd).map(|d| d.state.try_borrow_mut()) {
                Some(Ok(mut state)) => handle_command(hwnd, &mut state, control_id, notification),
                _ => false,
            };
            // Borrow released: WM_DESTROY runs synchronously inside DestroyWindow
            if close {
                let _ = DestroyWindow(hwnd);
            }
            LRESULT(0)
        }

        WM_CLOSE => {
            let _ = DestroyWindow(hwnd);
            LRESULT(0)
        }

        WM_DESTROY => {
            if let Some(dialog) = dialog_from_window(hwnd) {
                dialog.closed.set(true);
            }
            SetWindowLongPtrW(hwnd, GWLP_USERDATA, 0);
            LRESULT(0)
        }

        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}

unsafe fn create_controls(hwnd: HWND, state: &mut DialogState) {
    let hinstance: HINSTANCE = GetModuleHandleW(None).unwrap_or_default().into();
    let button_x = MARGIN + LIST_WIDTH + 10;

    create_child(hwnd, hinstance, w!("STATIC"), "Icons:", 0, (MARGIN, MARGIN, 200, 20), 0);

    state.controls.list = create_child(
        hwnd,
        hinstance,
        w!("LISTBOX"),
        "",
        WS_BORDER.0 | WS_VSCROLL.0 | WS_HSCROLL.0 | WS_TABSTOP.0 | LBS_NOTIFY | LBS_NOINTEGRALHEIGHT,
        (MARGIN, MARGIN + 24, LIST_WIDTH, LIST_HEIGHT),
        ID_ICON_LIST,
    );

    let buttons = [
        ("Add icons...", ID_ADD),
        ("Remove", ID_REMOVE),
        ("Move up", ID_MOVE_UP),
        ("Move down", ID_MOVE_DOWN),
    ];
    for (row, (label, id)) in buttons.into_iter().enumerate() {
        let y = MARGIN + 24 + row as i32 * (BUTTON_HEIGHT + 10);
        create_child(
            hwnd,
            hinstance,
            w!("BUTTON"),
            label,
            WS_TABSTOP.0,
            (button_x, y, BUTTON_WIDTH, BUTTON_HEIGHT),
            id,
        );
    }

    let mut y = MARGIN + 24 + LIST_HEIGHT + 16;
    create_child(
        hwnd,
        hinstance,
        w!("STATIC"),
        "Interval (ms):",
        0,
        (MARGIN, y + 3, 110, 20),
        0,
    );
    state.controls.interval = create_child(
        hwnd,
        hinstance,
        w!("EDIT"),
        &state.editor.interval_ms().to_string(),
        WS_BORDER.0 | WS_TABSTOP.0 | ES_NUMBER,
        (MARGIN + 120, y, 100, 24),
        ID_INTERVAL,
    );
    SendMessageW(
        state.controls.interval,
        EM_SETLIMITTEXT,
        Some(WPARAM(INTERVAL_MAX_DIGITS)),
        None,
    );

    y += 34;
    state.controls.auto_start = create_child(
        hwnd,
        hinstance,
        w!("BUTTON"),
        "Start the carousel automatically",
        WS_TABSTOP.0 | BS_AUTOCHECKBOX,
        (MARGIN, y, 300, 24),
        ID_AUTO_START,
    );
    if state.editor.auto_start() {
        SendMessageW(
            state.controls.auto_start,
            BM_SETCHECK,
            Some(WPARAM(BST_CHECKED)),
            None,
        );
    }

    let bottom = WINDOW_HEIGHT - 90;
    create_child(
        hwnd,
        hinstance,
        w!("BUTTON"),
        "OK",
        WS_TABSTOP.0 | BS_DEFPUSHBUTTON,
        (WINDOW_WIDTH - 190, bottom, 80, 28),
        ID_OK,
    );
    create_child(
        hwnd,
        hinstance,
        w!("BUTTON"),
        "Cancel",
        WS_TABSTOP.0,
        (WINDOW_WIDTH - 100, bottom, 80, 28),
        ID_CANCEL,
    );

    refresh_list(state);
}

unsafe fn create_child(
    hwnd: HWND,
    hinstance: HINSTANCE,
    class: PCWSTR,
    text: &str,
    style: u32,
    (x, y, width, height): (i32, i32, i32, i32),
    id: i32,
) -> HWND {
    let text_wide = to_wide(text);
    let child = CreateWindowExW(
        WINDOW_EX_STYLE::default(),
        class,
        PCWSTR(text_wide.as_ptr()),
        WS_CHILD | WS_VISIBLE | WINDOW_STYLE(style),
        x,
        y,
        width,
        height,
        Some(hwnd),
        Some(HMENU(id as isize as *mut _)),
        Some(hinstance),
        None,
    )
    .unwrap_or_default();

    let font = GetStockObject(DEFAULT_GUI_FONT);
    SendMessageW(
        child,
        WM_SETFONT,
        Some(WPARAM(font.0 as usize)),
        Some(LPARAM(1)),
    );
    child
}

/// Returns true when the window should close.
unsafe fn handle_command(
    hwnd: HWND,
    state: &mut DialogState,
    control_id: i32,
    notification: u32,
) -> bool {
    let selected = list_selection(state.controls.list);
    state.editor.select(selected);

    match control_id {
        ID_ADD => {
            let files = pick_icon_files(hwnd);
            if !files.is_empty() {
                let added = state.editor.add_paths(files);
                tracing::debug!("Added {} icon(s)", added);
                refresh_list(state);
            }
        }
        ID_REMOVE => {
            if let Some(index) = selected {
                state.editor.remove(index);
                refresh_list(state);
            }
        }
        ID_MOVE_UP => {
            if let Some(index) = selected {
                if state.editor.move_up(index) {
                    refresh_list(state);
                }
            }
        }
        ID_MOVE_DOWN => {
            if let Some(index) = selected {
                if state.editor.move_down(index) {
                    refresh_list(state);
                }
            }
        }
        // Selection already synced above
        ID_ICON_LIST if notification == LBN_SELCHANGE => {}
        ID_OK => {
            commit_inputs(state);
            state.outcome = Outcome::Accepted;
            return true;
        }
        ID_CANCEL => return true,
        _ => {}
    }
    false
}

/// Copy the interval field and checkbox into the editor.
unsafe fn commit_inputs(state: &mut DialogState) {
    let mut buffer = [0u16; 16];
    let len = GetWindowTextW(state.controls.interval, &mut buffer).max(0) as usize;
    let text = String::from_utf16_lossy(&buffer[..len]);
    match text.trim().parse::<u32>() {
        Ok(ms) => {
            let stored = state.editor.set_interval_ms(ms);
            if stored != ms {
                tracing::debug!("Interval {} ms clamped to {} ms", ms, stored);
            }
        }
        Err(_) => tracing::debug!("Keeping interval, invalid input {:?}", text),
    }

    let checked = SendMessageW(state.controls.auto_start, BM_GETCHECK, None, None).0 as usize;
    state.editor.set_auto_start(checked == BST_CHECKED);
}

unsafe fn refresh_list(state: &DialogState) {
    let list = state.controls.list;
    SendMessageW(list, LB_RESETCONTENT, None, None);
    for path in state.editor.paths() {
        let label_wide = to_wide(&entry_label(path));
        SendMessageW(
            list,
            LB_ADDSTRING,
            None,
            Some(LPARAM(label_wide.as_ptr() as isize)),
        );
    }
    // -1 clears the selection
    let selection = state.editor.selection().unwrap_or(usize::MAX);
    SendMessageW(list, LB_SETCURSEL, Some(WPARAM(selection)), None);
}

unsafe fn list_selection(list: HWND) -> Option<usize> {
    let index = SendMessageW(list, LB_GETCURSEL, None, None).0;
    usize::try_from(index).ok()
}
