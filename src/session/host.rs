//! Platform seam for the tray session.
//!
//! The session decides *what* happens; a [`TrayHost`] makes it visible.
//! The Windows implementation lives in `platform::windows::ui::tray`;
//! tests use a recording fake.

use std::time::Duration;

use super::notices::{Alert, Notice};
use crate::carousel::TrayIcon;
use crate::error::IconError;
use crate::model::Configuration;
use crate::settings::SettingsEditor;

/// Operations the session needs from the OS shell.
pub trait TrayHost {
    /// Show `icon` in the tray. On error the previous icon must stay.
    fn set_icon(&mut self, icon: &TrayIcon) -> Result<(), IconError>;

    /// Show the generic application icon.
    fn set_default_icon(&mut self);

    /// (Re)arm the recurring carousel timer.
    fn start_timer(&mut self, interval: Duration);

    /// Disarm the carousel timer. Must be idempotent.
    fn stop_timer(&mut self);

    /// Transient balloon notification.
    fn notify(&mut self, notice: Notice);

    /// Modal message box.
    fn alert(&mut self, alert: &Alert);

    /// Run the settings dialog on `editor`. `Some` if the user accepted.
    fn edit_settings(&mut self, editor: SettingsEditor) -> Option<Configuration>;

    /// Leave the UI loop.
    fn quit(&mut self);
}
