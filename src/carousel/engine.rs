//! Carousel state machine.
//!
//! Holds the resolved icon list, the index of the icon on display and
//! whether cycling is active. It knows nothing about timers or the tray:
//! the session drives it and pushes the resulting icon to the platform.

use std::path::{Path, PathBuf};

use crate::model::constants::MIN_CYCLE_ICONS;

/// Why the carousel refused to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StartError {
    #[error("at least {} icons are required, found {found}", MIN_CYCLE_ICONS)]
    NotEnoughIcons { found: usize },
}

/// Ordered icon list with a cursor and a running flag.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IconCarousel {
    icons: Vec<PathBuf>,
    current: usize,
    running: bool,
}

impl IconCarousel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the icon list. Rewinds to the first icon and stops.
    pub fn load(&mut self, icons: Vec<PathBuf>) {
        self.icons = icons;
        self.current = 0;
        self.running = false;
    }

    pub fn icons(&self) -> &[PathBuf] {
        &self.icons
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_icon(&self) -> Option<&Path> {
        self.icons.get(self.current).map(PathBuf::as_path)
    }

    /// True when there are enough icons to cycle.
    pub fn can_cycle(&self) -> bool {
        self.icons.len() >= MIN_CYCLE_ICONS
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Move to the next icon, wrapping at the end. No-op with fewer than two icons.
    pub fn advance(&mut self) -> usize {
        if self.icons.len() > 1 {
            self.current = (self.current + 1) % self.icons.len();
        }
        self.current
    }

    pub fn start(&mut self) -> Result<(), StartError> {
        if !self.can_cycle() {
            return Err(StartError::NotEnoughIcons {
                found: self.icons.len(),
            });
        }
        self.running = true;
        Ok(())
    }

    pub fn stop(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(names: &[&str]) -> IconCarousel {
        let mut c = IconCarousel::new();
        c.load(names.iter().map(PathBuf::from).collect());
        c
    }

    #[test]
    fn empty_carousel_has_no_current_icon() {
        let mut c = IconCarousel::new();
        assert!(c.current_icon().is_none());
        assert_eq!(c.advance(), 0);
    }

    #[test]
    fn advance_wraps_around() {
        let mut c = carousel(&["a.ico", "b.ico", "c.ico"]);
        assert_eq!(c.advance(), 1);
        assert_eq!(c.advance(), 2);
        assert_eq!(c.advance(), 0);
        assert_eq!(c.current_icon(), Some(Path::new("a.ico")));
    }

    #[test]
    fn load_rewinds_and_stops() {
        let mut c = carousel(&["a.ico", "b.ico"]);
        c.start().unwrap();
        c.advance();
        c.load(vec![PathBuf::from("x.png"), PathBuf::from("y.png")]);
        assert_eq!(c.current_index(), 0);
        assert!(!c.is_running());
    }

    #[test]
    fn start_error_message_names_counts() {
        let err = StartError::NotEnoughIcons { found: 1 };
        assert_eq!(err.to_string(), "at least 2 icons are required, found 1");
    }
}
