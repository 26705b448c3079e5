//! Icon list resolution.
//!
//! Filters the configured paths down to files that exist. When nothing
//! survives, the fallback icon directory is scanned instead.

use std::fs;
use std::path::{Path, PathBuf};

use crate::model::constants::ICON_EXTENSIONS;

/// Lowercased extension of `path`, if it is one of [`ICON_EXTENSIONS`].
pub fn icon_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    ICON_EXTENSIONS.iter().copied().find(|known| *known == ext)
}

/// True if `path` has a recognised icon extension.
pub fn is_icon_file(path: &Path) -> bool {
    icon_extension(path).is_some()
}

/// Resolve the icons to cycle through.
///
/// Configured entries that exist as files are kept in order, first
/// occurrence only. If none do, the result is the listing of `fallback_dir`.
pub fn resolve_icons(configured: &[PathBuf], fallback_dir: &Path) -> Vec<PathBuf> {
    let mut existing: Vec<PathBuf> = Vec::with_capacity(configured.len());
    for path in configured {
        if !path.is_file() {
            tracing::debug!("Skipping missing icon {}", path.display());
        } else if !existing.contains(path) {
            existing.push(path.clone());
        }
    }

    if !existing.is_empty() {
        return existing;
    }

    let scanned = scan_icon_dir(fallback_dir);
    if !scanned.is_empty() {
        tracing::info!(
            "No configured icons found, using {} icon(s) from {}",
            scanned.len(),
            fallback_dir.display()
        );
    }
    scanned
}

/// List icon files in `dir`.
///
/// Grouped by extension in [`ICON_EXTENSIONS`] order, then by file name.
/// A missing or unreadable directory yields an empty list.
pub fn scan_icon_dir(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!("Cannot read icon directory {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut files: Vec<(usize, PathBuf)> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter_map(|path| {
            let ext = icon_extension(&path)?;
            let rank = ICON_EXTENSIONS.iter().position(|known| *known == ext)?;
            Some((rank, path))
        })
        .collect();

    files.sort_by(|(rank_a, a), (rank_b, b)| {
        rank_a
            .cmp(rank_b)
            .then_with(|| a.file_name().cmp(&b.file_name()))
    });
    files.into_iter().map(|(_, path)| path).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_extensions_case_insensitively() {
        assert_eq!(icon_extension(Path::new("a.ICO")), Some("ico"));
        assert_eq!(icon_extension(Path::new("dir/b.Jpeg")), Some("jpeg"));
        assert!(is_icon_file(Path::new("c.bmp")));
        assert!(!is_icon_file(Path::new("notes.txt")));
        assert!(!is_icon_file(Path::new("no_extension")));
    }

    #[test]
    fn scan_of_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scan_icon_dir(&dir.path().join("Icons")).is_empty());
    }

    #[test]
    fn scan_groups_by_extension_then_name() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["z.png", "b.ico", "a.png", "m.bmp", "c.jpg", "readme.txt"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("sub.ico")).unwrap();

        let names: Vec<String> = scan_icon_dir(dir.path())
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["b.ico", "a.png", "z.png", "c.jpg", "m.bmp"]);
    }
}
