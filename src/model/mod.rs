//! Application domain model.
//!
//! This module contains pure data definitions (no FFI dependencies):
//! the persisted configuration record and the application constants.
//!
//! Persistence lives in `storage`.

pub mod config;
pub mod constants;

pub use config::{clamp_interval, Configuration};
pub use constants::*;
