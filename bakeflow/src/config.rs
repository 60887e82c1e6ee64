//! Stage timing configuration for the kitchen chain.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Per-stage latency overrides, in milliseconds.
///
/// Every field defaults to 1000 ms, so a config document only needs to name
/// the stages it changes:
///
/// ```
/// use bakeflow::config::KitchenConfig;
///
/// let config = KitchenConfig::from_json(r#"{"bake_ms": 250}"#).unwrap();
/// assert_eq!(config.prepare_ms, 1000);
/// assert_eq!(config.bake_ms, 250);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitchenConfig {
    /// Latency of the prepare stage, in milliseconds.
    pub prepare_ms: u64,
    /// Latency of the bake stage, in milliseconds.
    pub bake_ms: u64,
    /// Latency of the cut stage, in milliseconds.
    pub cut_ms: u64,
    /// Latency of the serve stage, in milliseconds.
    pub serve_ms: u64,
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self::uniform(1000)
    }
}

impl KitchenConfig {
    /// Creates a config where every stage has the same latency.
    #[must_use]
    pub fn uniform(ms: u64) -> Self {
        Self {
            prepare_ms: ms,
            bake_ms: ms,
            cut_ms: ms,
            serve_ms: ms,
        }
    }

    /// Parses a config from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON for this shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Returns the prepare-stage latency.
    #[must_use]
    pub fn prepare(&self) -> Duration {
        Duration::from_millis(self.prepare_ms)
    }

    /// Returns the bake-stage latency.
    #[must_use]
    pub fn bake(&self) -> Duration {
        Duration::from_millis(self.bake_ms)
    }

    /// Returns the cut-stage latency.
    #[must_use]
    pub fn cut(&self) -> Duration {
        Duration::from_millis(self.cut_ms)
    }

    /// Returns the serve-stage latency.
    #[must_use]
    pub fn serve(&self) -> Duration {
        Duration::from_millis(self.serve_ms)
    }
}
