//! Persisted configuration record (pure Rust, no FFI).
//!
//! Serialized as camelCase JSON by `storage::config`.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize};

use super::constants::*;

/// Carousel configuration, as stored in `config.json`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Configuration {
    /// Icon files in playback order.
    pub icon_paths: Vec<PathBuf>,
    /// Time between icon swaps.
    #[serde(
        rename = "intervalMilliseconds",
        deserialize_with = "interval_or_default"
    )]
    pub interval_ms: u32,
    /// Start cycling as soon as the icons are set up.
    pub auto_start: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            icon_paths: Vec::new(),
            interval_ms: DEFAULT_INTERVAL_MS,
            auto_start: false,
        }
    }
}

impl Configuration {
    /// Clamps the interval to the supported range.
    pub fn validate(&mut self) {
        self.interval_ms = clamp_interval(self.interval_ms);
    }

    /// The interval as a `Duration`.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.interval_ms))
    }
}

/// Read `intervalMilliseconds` without failing the whole record.
///
/// Negative numbers and non-numbers fall back to the default; oversized
/// values saturate and are clamped later by `validate`.
fn interval_or_default<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawInterval {
        Integer(i64),
        Float(f64),
        Other(serde::de::IgnoredAny),
    }

    let ms = match RawInterval::deserialize(deserializer)? {
        RawInterval::Integer(ms) if ms >= 0 => u32::try_from(ms).unwrap_or(u32::MAX),
        RawInterval::Float(ms) if ms.is_finite() && ms >= 0.0 => ms.round() as u32,
        _ => {
            tracing::warn!(
                "Invalid intervalMilliseconds, using {} ms",
                DEFAULT_INTERVAL_MS
            );
            DEFAULT_INTERVAL_MS
        }
    };
    Ok(ms)
}

/// Clamp an interval to `[MIN_INTERVAL_MS, MAX_INTERVAL_MS]`.
pub fn clamp_interval(ms: u32) -> u32 {
    ms.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS)
}
