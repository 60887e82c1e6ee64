//! The opaque result value handed from one stage to the next.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The result of one stage, consumed by the next.
///
/// A token is immutable once produced: it exposes getters only, and its
/// identity is nothing more than its label plus the stage that made it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageToken {
    /// Human-readable label describing chain progress.
    label: String,
    /// Name of the stage that produced this token.
    produced_by: String,
}

impl StageToken {
    /// Creates a token produced by the named stage.
    #[must_use]
    pub fn new(produced_by: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            produced_by: produced_by.into(),
        }
    }

    /// Returns the token label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the name of the producing stage.
    #[must_use]
    pub fn produced_by(&self) -> &str {
        &self.produced_by
    }
}

impl fmt::Display for StageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}
