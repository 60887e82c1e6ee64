//! Chain builder with validation.

use super::StageChain;
use crate::errors::ChainValidationError;
use crate::stages::Stage;
use std::collections::HashSet;
use std::sync::Arc;

/// Builder for a fixed-order stage chain.
///
/// Insertion order is execution order; there is no dependency graph to
/// declare because each stage implicitly depends on the one before it.
#[derive(Debug)]
pub struct ChainBuilder {
    /// The chain name.
    name: String,
    /// Stages in execution order.
    stages: Vec<Arc<dyn Stage>>,
}

impl ChainBuilder {
    /// Creates a new chain builder.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stages: Vec::new(),
        }
    }

    /// Appends a stage to the end of the chain.
    #[must_use]
    pub fn stage(mut self, stage: Arc<dyn Stage>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Returns the chain name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of stages added so far.
    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Builds the chain.
    ///
    /// # Errors
    ///
    /// Returns an error if the chain name is empty or whitespace-only, the
    /// chain has no stages, or two stages share a name.
    pub fn build(self) -> Result<StageChain, ChainValidationError> {
        if self.name.trim().is_empty() {
            return Err(ChainValidationError::new(
                "Chain name cannot be empty or whitespace-only",
            ));
        }

        if self.stages.is_empty() {
            return Err(ChainValidationError::new("Chain has no stages"));
        }

        let mut seen = HashSet::new();
        for stage in &self.stages {
            if !seen.insert(stage.name().to_string()) {
                return Err(ChainValidationError::new(format!(
                    "Duplicate stage name '{}'",
                    stage.name()
                ))
                .with_stages(vec![stage.name().to_string()]));
            }
        }

        Ok(StageChain::new(self.name, self.stages))
    }
}
