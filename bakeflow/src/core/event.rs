//! Typed observability events emitted during a chain run.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An event emitted while a chain runs.
///
/// The chain emits a closed set of event kinds: `stage.started`,
/// `stage.completed`, `stage.failed`, and `chain.completed`. Sinks consume
/// them for logging or test assertions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageEvent {
    /// The event kind (e.g., "stage.started").
    #[serde(rename = "type")]
    pub kind: String,

    /// When the event occurred (ISO 8601).
    pub timestamp: String,

    /// The event payload data.
    #[serde(default)]
    pub data: HashMap<String, serde_json::Value>,
}

impl StageEvent {
    /// Creates a new event of the given kind.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            timestamp: crate::utils::iso_timestamp(),
            data: HashMap::new(),
        }
    }

    /// Adds a data field to the event.
    #[must_use]
    pub fn add_data(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.data.insert(key.into(), value);
        self
    }

    /// Creates a "stage.started" event.
    #[must_use]
    pub fn started(stage_name: &str) -> Self {
        Self::new("stage.started").add_data("stage", serde_json::json!(stage_name))
    }

    /// Creates a "stage.completed" event.
    #[must_use]
    pub fn completed(stage_name: &str, duration_ms: f64, line: &str) -> Self {
        Self::new("stage.completed")
            .add_data("stage", serde_json::json!(stage_name))
            .add_data("duration_ms", serde_json::json!(duration_ms))
            .add_data("line", serde_json::json!(line))
    }

    /// Creates a "stage.failed" event.
    #[must_use]
    pub fn failed(stage_name: &str, error: &str) -> Self {
        Self::new("stage.failed")
            .add_data("stage", serde_json::json!(stage_name))
            .add_data("error", serde_json::json!(error))
    }

    /// Creates a "chain.completed" event.
    #[must_use]
    pub fn chain_completed(chain_name: &str, duration_ms: f64) -> Self {
        Self::new("chain.completed")
            .add_data("chain", serde_json::json!(chain_name))
            .add_data("duration_ms", serde_json::json!(duration_ms))
    }
}
