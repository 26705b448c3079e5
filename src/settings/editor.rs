//! Settings working copy.
//!
//! The settings dialog edits a copy of the active configuration. Nothing
//! reaches the session unless the copy is accepted; dropping the editor
//! discards every change.

use std::path::{Path, PathBuf};

use crate::model::{clamp_interval, Configuration};

/// Editable copy of a [`Configuration`] with a list selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsEditor {
    working: Configuration,
    selection: Option<usize>,
}

impl SettingsEditor {
    pub fn new(config: &Configuration) -> Self {
        Self {
            working: config.clone(),
            selection: None,
        }
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.working.icon_paths
    }

    pub fn interval_ms(&self) -> u32 {
        self.working.interval_ms
    }

    pub fn auto_start(&self) -> bool {
        self.working.auto_start
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// Select `index`, or clear the selection if it is out of range.
    pub fn select(&mut self, index: Option<usize>) {
        self.selection = index.filter(|&i| i < self.working.icon_paths.len());
    }

    /// Append paths that are not already in the list. Returns how many were added.
    pub fn add_paths<I>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut added = 0;
        for path in paths {
            if self.working.icon_paths.contains(&path) {
                tracing::debug!("Ignoring duplicate icon {}", path.display());
                continue;
            }
            self.working.icon_paths.push(path);
            added += 1;
        }
        added
    }

    /// Remove the entry at `index`.
    ///
    /// The selection stays on `index` if it is still valid, moves to the new
    /// last entry otherwise, and is cleared when the list becomes empty.
    pub fn remove(&mut self, index: usize) -> Option<PathBuf> {
        if index >= self.working.icon_paths.len() {
            return None;
        }
        let removed = self.working.icon_paths.remove(index);
        let len = self.working.icon_paths.len();
        self.selection = match len {
            0 => None,
            _ if index < len => Some(index),
            _ => Some(len - 1),
        };
        Some(removed)
    }

    /// Swap `index` with its predecessor. No-op at the top.
    pub fn move_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.working.icon_paths.len() {
            return false;
        }
        self.working.icon_paths.swap(index, index - 1);
        self.selection = Some(index - 1);
        true
    }

    /// Swap `index` with its successor. No-op at the bottom.
    pub fn move_down(&mut self, index: usize) -> bool {
        if index >= self.working.icon_paths.len().saturating_sub(1) {
            return false;
        }
        self.working.icon_paths.swap(index, index + 1);
        self.selection = Some(index + 1);
        true
    }

    /// Set the interval, clamped to the supported range. Returns the stored value.
    pub fn set_interval_ms(&mut self, ms: u32) -> u32 {
        self.working.interval_ms = clamp_interval(ms);
        self.working.interval_ms
    }

    pub fn set_auto_start(&mut self, enabled: bool) {
        self.working.auto_start = enabled;
    }

    /// Finish editing and hand back the new configuration.
    pub fn accept(self) -> Configuration {
        self.working
    }
}

/// List label for an icon: `"<file name> - <full path>"`.
pub fn entry_label(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{} - {}", name, path.display())
}
