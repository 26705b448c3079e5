//! User-facing messages.
//!
//! [`Notice`]s are transient balloon tips; [`Alert`]s are modal message
//! boxes. Text lives here so the platform layer only displays it.

use std::path::PathBuf;

use crate::model::constants::{APP_NAME, APP_VERSION, MIN_CYCLE_ICONS};

/// Transient tray balloon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    CarouselStarted,
    CarouselStopped,
}

impl Notice {
    pub fn title(&self) -> &'static str {
        APP_NAME
    }

    pub fn message(&self) -> &'static str {
        match self {
            Notice::CarouselStarted => "Carousel started",
            Notice::CarouselStopped => "Carousel stopped",
        }
    }
}

/// Severity shown with an [`Alert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Error,
}

/// Modal message box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    /// Neither the configured list nor the fallback directory had icons.
    NoIconsFound,
    /// Start requested with fewer than two icons.
    NeedMoreIcons { found: usize },
    /// `config.json` could not be written.
    SaveFailed { reason: String },
    /// An icon could not be decoded or converted.
    IconLoadFailed { path: PathBuf, reason: String },
    /// Another instance holds the single-instance lock.
    AlreadyRunning,
    About,
}

impl Alert {
    pub fn level(&self) -> AlertLevel {
        match self {
            Alert::SaveFailed { .. } | Alert::IconLoadFailed { .. } => AlertLevel::Error,
            _ => AlertLevel::Info,
        }
    }

    pub fn title(&self) -> String {
        match self {
            Alert::About => format!("About {}", APP_NAME),
            _ if self.level() == AlertLevel::Error => "Error".to_string(),
            _ => APP_NAME.to_string(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            Alert::NoIconsFound => {
                "No icon files were found. Add icons in Settings.".to_string()
            }
            Alert::NeedMoreIcons { found } => format!(
                "At least {} icons are needed to start the carousel ({} available).",
                MIN_CYCLE_ICONS, found
            ),
            Alert::SaveFailed { reason } => {
                format!("Failed to save the configuration file: {}", reason)
            }
            Alert::IconLoadFailed { path, reason } => {
                format!("Failed to load icon {}: {}", path.display(), reason)
            }
            Alert::AlreadyRunning => format!("{} is already running.", APP_NAME),
            Alert::About => format!(
                "{} v{}\n\n\
                Features:\n\
                • Cycles the tray icon on a timer\n\
                • Custom icon list and interval\n\
                • ICO, PNG, JPEG and BMP images\n\
                • Settings saved automatically",
                APP_NAME, APP_VERSION
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_are_errors() {
        let save = Alert::SaveFailed {
            reason: "disk full".into(),
        };
        assert_eq!(save.level(), AlertLevel::Error);
        assert_eq!(save.title(), "Error");
        assert!(save.message().contains("disk full"));
    }

    #[test]
    fn informational_alerts_use_app_name() {
        assert_eq!(Alert::NoIconsFound.level(), AlertLevel::Info);
        assert_eq!(Alert::NoIconsFound.title(), APP_NAME);
        assert!(Alert::About.message().contains(APP_VERSION));
    }

    #[test]
    fn need_more_icons_mentions_count() {
        let msg = Alert::NeedMoreIcons { found: 1 }.message();
        assert!(msg.contains("At least 2"));
        assert!(msg.contains("1 available"));
    }
}
