//! Dialog windows for Windows.

mod message_box;

pub use message_box::*;
