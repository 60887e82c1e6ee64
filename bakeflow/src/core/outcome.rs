//! Stage outcome type with factory methods for the two terminal states.

use super::{StageStatus, StageToken};
use serde::{Deserialize, Serialize};

/// What a stage reports when its unit of work finishes.
///
/// An outcome is immutable once created. A `Done` outcome carries the token
/// handed to the next stage and the console line announcing completion; a
/// `Fail` outcome carries the error message instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageOutcome {
    /// The status of the stage execution.
    pub status: StageStatus,

    /// The token produced (for successful executions).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<StageToken>,

    /// The console line announcing completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,

    /// Error message (for failed executions).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StageOutcome {
    /// Creates a successful outcome with a token and its console line.
    #[must_use]
    pub fn done(token: StageToken, line: impl Into<String>) -> Self {
        Self {
            status: StageStatus::Done,
            token: Some(token),
            line: Some(line.into()),
            error: None,
        }
    }

    /// Creates a failure outcome with an error message.
    #[must_use]
    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            status: StageStatus::Fail,
            token: None,
            line: None,
            error: Some(error.into()),
        }
    }

    /// Returns true if the outcome indicates success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns true if the outcome indicates failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.status.is_failure()
    }

    /// Returns the produced token, if any.
    #[must_use]
    pub fn token(&self) -> Option<&StageToken> {
        self.token.as_ref()
    }
}
