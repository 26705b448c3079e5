//! HICON creation from prepared tray icons.

use windows::core::PCWSTR;
use windows::Win32::UI::WindowsAndMessaging::{
    CreateIcon, DestroyIcon, LoadImageW, HICON, IMAGE_ICON, LR_LOADFROMFILE,
};

use crate::carousel::render::rgba_to_bgra;
use crate::carousel::{IconData, TrayIcon};
use crate::error::IconError;
use crate::model::constants::SMALL_ICON_SIZE;
use crate::platform::windows::ffi::path_to_wide;

/// An icon handle this process created and must destroy.
pub struct OwnedIcon(HICON);

impl OwnedIcon {
    pub fn handle(&self) -> HICON {
        self.0
    }
}

impl Drop for OwnedIcon {
    fn drop(&mut self) {
        unsafe {
            let _ = DestroyIcon(self.0);
        }
    }
}

/// Build a native icon for `icon`.
pub fn create_icon(icon: &TrayIcon) -> Result<OwnedIcon, IconError> {
    let platform_error = |e: windows::core::Error| IconError::Platform {
        path: icon.path.clone(),
        message: e.to_string(),
    };

    match &icon.data {
        IconData::File => {
            let path_wide = path_to_wide(&icon.path);
            let size = SMALL_ICON_SIZE as i32;
            let handle = unsafe {
                LoadImageW(
                    None,
                    PCWSTR(path_wide.as_ptr()),
                    IMAGE_ICON,
                    size,
                    size,
                    LR_LOADFROMFILE,
                )
            }
            .map_err(platform_error)?;
            Ok(OwnedIcon(HICON(handle.0)))
        }
        IconData::Rgba {
            width,
            height,
            pixels,
        } => {
            let color = rgba_to_bgra(pixels);
            // Alpha comes from the 32bpp color plane; the AND mask stays clear.
            let mask = vec![0u8; mask_len(*width, *height)];
            let handle = unsafe {
                CreateIcon(
                    None,
                    *width as i32,
                    *height as i32,
                    1,
                    32,
                    mask.as_ptr(),
                    color.as_ptr(),
                )
            }
            .map_err(platform_error)?;
            Ok(OwnedIcon(handle))
        }
    }
}

/// Byte length of a monochrome AND mask (rows padded to 16 bits).
fn mask_len(width: u32, height: u32) -> usize {
    let stride = width.div_ceil(16) * 2;
    (stride * height) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_rows_are_word_aligned() {
        assert_eq!(mask_len(16, 16), 32);
        assert_eq!(mask_len(17, 1), 4);
    }
}
