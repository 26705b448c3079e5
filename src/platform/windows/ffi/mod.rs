//! FFI helpers for Windows APIs.
//!
//! Win32 wants NUL-terminated UTF-16; these helpers build it from Rust
//! strings and paths.

pub mod wide;

pub use wide::*;
