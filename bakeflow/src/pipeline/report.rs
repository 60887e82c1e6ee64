//! Record of one completed chain run.

use crate::core::{StageStatus, StageToken};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What one stage did during a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageRecord {
    /// The stage name.
    pub name: String,
    /// The terminal status the stage reached.
    pub status: StageStatus,
    /// The token the stage received (None for the first stage).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<StageToken>,
    /// The token the stage produced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<StageToken>,
    /// The console line the stage announced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
    /// Stage execution time in milliseconds.
    pub duration_ms: f64,
}

/// The result of one successful chain run.
///
/// Constructed exactly once per run, after the final stage completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// The chain name.
    pub chain: String,
    /// The run ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_id: Option<Uuid>,
    /// The ordered console lines: one per stage, then the final line.
    pub lines: Vec<String>,
    /// Per-stage records in execution order.
    pub records: Vec<StageRecord>,
    /// Total execution time in milliseconds.
    pub duration_ms: f64,
    /// Whether every stage completed.
    pub completed: bool,
}

impl RunReport {
    /// Returns the ordered console lines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the per-stage records.
    #[must_use]
    pub fn records(&self) -> &[StageRecord] {
        &self.records
    }

    /// Returns true if every stage completed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Returns the final console line.
    #[must_use]
    pub fn final_line(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }
}
