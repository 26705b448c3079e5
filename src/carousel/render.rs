//! Icon preparation.
//!
//! `.ico` files are handed to the platform untouched. Any other supported
//! image is decoded and resampled to the small tray icon size, so the
//! platform layer only ever converts plain RGBA pixels.

use std::path::{Path, PathBuf};

use image::imageops::FilterType;

use super::resolve::icon_extension;
use crate::error::IconError;
use crate::model::constants::{NATIVE_ICON_EXTENSION, SMALL_ICON_SIZE};

/// Pixel payload of a [`TrayIcon`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconData {
    /// Native icon file, loaded directly by the platform.
    File,
    /// Decoded RGBA8 pixels, row-major, `width * height * 4` bytes.
    Rgba {
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    },
}

/// An icon ready to hand to the tray.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrayIcon {
    pub path: PathBuf,
    pub data: IconData,
}

impl TrayIcon {
    pub fn is_native(&self) -> bool {
        matches!(self.data, IconData::File)
    }
}

/// Prepare the icon at `path` for display.
pub fn prepare_icon(path: &Path) -> Result<TrayIcon, IconError> {
    let ext =
        icon_extension(path).ok_or_else(|| IconError::UnsupportedFormat(path.to_path_buf()))?;

    if ext == NATIVE_ICON_EXTENSION {
        return Ok(TrayIcon {
            path: path.to_path_buf(),
            data: IconData::File,
        });
    }

    let decoded = image::open(path).map_err(|source| IconError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let resized = decoded
        .resize_exact(SMALL_ICON_SIZE, SMALL_ICON_SIZE, FilterType::Triangle)
        .to_rgba8();

    Ok(TrayIcon {
        path: path.to_path_buf(),
        data: IconData::Rgba {
            width: resized.width(),
            height: resized.height(),
            pixels: resized.into_raw(),
        },
    })
}

/// Reorder RGBA8 pixels to the BGRA8 layout GDI bitmaps expect.
pub fn rgba_to_bgra(pixels: &[u8]) -> Vec<u8> {
    pixels
        .chunks_exact(4)
        .flat_map(|px| [px[2], px[1], px[0], px[3]])
        .collect()
}
