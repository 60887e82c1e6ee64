//! Error types for the bakeflow chain.

use thiserror::Error;

/// The main error type for bakeflow operations.
#[derive(Debug, Error)]
pub enum BakeflowError {
    /// A chain validation error occurred.
    #[error("{0}")]
    Validation(#[from] ChainValidationError),

    /// A stage reported failure; the run was aborted.
    #[error("Stage '{stage}' failed: {reason}")]
    StageFailed {
        /// The failing stage.
        stage: String,
        /// The failure reason reported by the stage.
        reason: String,
    },

    /// A generic internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BakeflowError {
    /// Creates a stage failure error.
    #[must_use]
    pub fn stage_failed(stage: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::StageFailed {
            stage: stage.into(),
            reason: reason.into(),
        }
    }
}

/// Error raised when chain construction is invalid.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ChainValidationError {
    /// The error message.
    pub message: String,
    /// The stages involved in the error.
    pub stages: Vec<String>,
}

impl ChainValidationError {
    /// Creates a new chain validation error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stages: Vec::new(),
        }
    }

    /// Sets the stages involved.
    #[must_use]
    pub fn with_stages(mut self, stages: Vec<String>) -> Self {
        self.stages = stages;
        self
    }
}
