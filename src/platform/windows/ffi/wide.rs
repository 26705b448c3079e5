//! UTF-16 string conversion.

use std::ffi::OsString;
use std::iter::once;
use std::os::windows::ffi::{OsStrExt, OsStringExt};
use std::path::{Path, PathBuf};

/// NUL-terminated UTF-16 copy of `s`.
pub fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(once(0)).collect()
}

/// NUL-terminated UTF-16 copy of `path`.
pub fn path_to_wide(path: &Path) -> Vec<u16> {
    path.as_os_str().encode_wide().chain(once(0)).collect()
}

/// Path from UTF-16 without a terminator.
pub fn path_from_wide(wide: &[u16]) -> PathBuf {
    PathBuf::from(OsString::from_wide(wide))
}

/// Copy `s` into a fixed-size buffer, truncating and keeping a terminator.
pub fn copy_to_buffer(dst: &mut [u16], s: &str) {
    let max = dst.len().saturating_sub(1);
    let mut written = 0;
    for (slot, c) in dst.iter_mut().zip(s.encode_utf16().take(max)) {
        *slot = c;
        written += 1;
    }
    if let Some(end) = dst.get_mut(written) {
        *end = 0;
    }
}
