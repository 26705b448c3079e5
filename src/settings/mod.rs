//! Settings editing, independent of any dialog toolkit.

pub mod editor;

pub use editor::{entry_label, SettingsEditor};
