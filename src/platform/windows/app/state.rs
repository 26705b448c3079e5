//! Windows runtime context.
//!
//! The tray window keeps a pointer to this in `GWLP_USERDATA`; the window
//! procedure turns messages into commands and applies them here.

use std::cell::RefCell;

use crate::platform::windows::ui::tray::{self, Win32Tray};
use crate::session::{Command, Flow, TraySession};

/// Live session owned by the tray window.
pub struct AppContext {
    session: RefCell<TraySession<Win32Tray>>,
}

impl AppContext {
    pub fn new(session: TraySession<Win32Tray>) -> Self {
        Self {
            session: RefCell::new(session),
        }
    }

    /// Apply `command` unless another one is still in progress.
    ///
    /// Modal loops (settings window, message boxes) keep pumping messages
    /// while a command runs; anything arriving then is dropped.
    pub fn dispatch(&self, command: Command) -> Option<Flow> {
        match self.session.try_borrow_mut() {
            Ok(mut session) => Some(session.handle(command)),
            Err(_) => {
                tracing::debug!("Busy, dropping command: {}", command.description());
                None
            }
        }
    }

    /// Show the tray context menu at the cursor.
    pub fn show_menu(&self) {
        let handles = match self.session.try_borrow() {
            Ok(session) => session.host().menu_handles(),
            Err(_) => return,
        };
        tray::show_context_menu(handles);
    }

    /// Take the tray icon down now instead of when the message loop unwinds.
    pub fn retire_tray(&self) {
        if let Ok(mut session) = self.session.try_borrow_mut() {
            session.host_mut().remove();
        }
    }

    /// The user is logging off: stop and remove the tray icon right away.
    pub fn end_session(&self) {
        if self.dispatch(Command::Exit) == Some(Flow::Exit) {
            self.retire_tray();
        }
    }
}
