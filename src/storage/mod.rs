//! Configuration storage.
//!
//! Persists settings to a JSON file (`config.json`).

pub mod config;

pub use config::{ConfigOrigin, ConfigStore, LoadedConfig};
