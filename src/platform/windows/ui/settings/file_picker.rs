//! Multi-select "open file" dialog for icon files.

use std::path::PathBuf;

use windows::core::{PCWSTR, PWSTR};
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::Controls::Dialogs::{
    GetOpenFileNameW, OFN_ALLOWMULTISELECT, OFN_EXPLORER, OFN_FILEMUSTEXIST, OFN_HIDEREADONLY,
    OFN_PATHMUSTEXIST, OPENFILENAMEW,
};

use crate::model::constants::ICON_EXTENSIONS;
use crate::platform::windows::ffi::{path_from_wide, to_wide};

// Room for a few hundred selected files
const FILE_BUFFER_LEN: usize = 32 * 1024;

/// Ask the user for one or more icon files. Empty if cancelled.
pub fn pick_icon_files(owner: HWND) -> Vec<PathBuf> {
    let mut buffer = vec![0u16; FILE_BUFFER_LEN];
    let filter = filter_spec();
    let title = to_wide("Select icon files");

    let mut ofn = OPENFILENAMEW {
        lStructSize: std::mem::size_of::<OPENFILENAMEW>() as u32,
        hwndOwner: owner,
        lpstrFilter: PCWSTR(filter.as_ptr()),
        lpstrFile: PWSTR(buffer.as_mut_ptr()),
        nMaxFile: buffer.len() as u32,
        lpstrTitle: PCWSTR(title.as_ptr()),
        Flags: OFN_ALLOWMULTISELECT
            | OFN_EXPLORER
            | OFN_FILEMUSTEXIST
            | OFN_PATHMUSTEXIST
            | OFN_HIDEREADONLY,
        ..Default::default()
    };

    let picked = unsafe { GetOpenFileNameW(&mut ofn) }.as_bool();
    if !picked {
        return Vec::new();
    }
    parse_selection(&buffer)
}

/// `Icon files\0*.ico;*.png;...\0All files\0*.*\0\0`
fn filter_spec() -> Vec<u16> {
    let patterns = ICON_EXTENSIONS
        .iter()
        .map(|ext| format!("*.{}", ext))
        .collect::<Vec<_>>()
        .join(";");
    let spec = format!("Icon files\0{}\0All files\0*.*\0", patterns);
    to_wide(&spec)
}

/// Decode the dialog's result buffer.
///
/// One file: its full path. Several: the directory followed by file names,
/// each NUL-terminated, ending with an empty string.
fn parse_selection(buffer: &[u16]) -> Vec<PathBuf> {
    let parts: Vec<&[u16]> = buffer
        .split(|&c| c == 0)
        .take_while(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [] => Vec::new(),
        [single] => vec![path_from_wide(single)],
        [dir, names @ ..] => {
            let dir = path_from_wide(dir);
            names.iter().map(|name| dir.join(path_from_wide(name))).collect()
        }
    }
}
