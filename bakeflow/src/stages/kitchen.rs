//! The four kitchen stages: prepare, bake, cut, serve.
//!
//! Each stage announces completion with a console line and hands a token to
//! the next stage. The chain order is fixed; only the latencies vary.

use super::{Stage, DEFAULT_STAGE_DELAY};
use crate::config::KitchenConfig;
use crate::context::StageContext;
use crate::core::{StageOutcome, StageToken};
use crate::errors::ChainValidationError;
use crate::pipeline::{ChainBuilder, StageChain};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// First stage: makes the dough. Needs no input token.
#[derive(Debug, Clone)]
pub struct PrepareStage {
    delay: Duration,
}

impl PrepareStage {
    /// Creates the stage with the given latency.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for PrepareStage {
    fn default() -> Self {
        Self::new(DEFAULT_STAGE_DELAY)
    }
}

#[async_trait]
impl Stage for PrepareStage {
    fn name(&self) -> &str {
        "prepare"
    }

    fn work_duration(&self) -> Duration {
        self.delay
    }

    async fn execute(&self, _ctx: &StageContext) -> StageOutcome {
        StageOutcome::done(StageToken::new("prepare", "dough"), "Dough is ready")
    }
}

/// Second stage: bakes the dough it was handed.
#[derive(Debug, Clone)]
pub struct BakeStage {
    delay: Duration,
}

impl BakeStage {
    /// Creates the stage with the given latency.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for BakeStage {
    fn default() -> Self {
        Self::new(DEFAULT_STAGE_DELAY)
    }
}

#[async_trait]
impl Stage for BakeStage {
    fn name(&self) -> &str {
        "bake"
    }

    fn work_duration(&self) -> Duration {
        self.delay
    }

    async fn execute(&self, ctx: &StageContext) -> StageOutcome {
        match ctx.previous_token() {
            Some(prev) => StageOutcome::done(
                StageToken::new("bake", "baked pizza"),
                format!("Pizza baked using {prev}"),
            ),
            None => StageOutcome::fail("bake received no input token"),
        }
    }
}

/// Third stage: cuts the baked pizza.
#[derive(Debug, Clone)]
pub struct CutStage {
    delay: Duration,
}

impl CutStage {
    /// Creates the stage with the given latency.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for CutStage {
    fn default() -> Self {
        Self::new(DEFAULT_STAGE_DELAY)
    }
}

#[async_trait]
impl Stage for CutStage {
    fn name(&self) -> &str {
        "cut"
    }

    fn work_duration(&self) -> Duration {
        self.delay
    }

    async fn execute(&self, ctx: &StageContext) -> StageOutcome {
        match ctx.previous_token() {
            Some(prev) => StageOutcome::done(
                StageToken::new("cut", "cut pizza"),
                format!("Pizza cut: {prev}"),
            ),
            None => StageOutcome::fail("cut received no input token"),
        }
    }
}

/// Final stage: serves the cut pizza. Its token is terminal.
#[derive(Debug, Clone)]
pub struct ServeStage {
    delay: Duration,
}

impl ServeStage {
    /// Creates the stage with the given latency.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for ServeStage {
    fn default() -> Self {
        Self::new(DEFAULT_STAGE_DELAY)
    }
}

#[async_trait]
impl Stage for ServeStage {
    fn name(&self) -> &str {
        "serve"
    }

    fn work_duration(&self) -> Duration {
        self.delay
    }

    async fn execute(&self, ctx: &StageContext) -> StageOutcome {
        match ctx.previous_token() {
            Some(prev) => StageOutcome::done(
                StageToken::new("serve", "served pizza"),
                format!("Pizza served: {prev}"),
            ),
            None => StageOutcome::fail("serve received no input token"),
        }
    }
}

/// Builds the four-stage kitchen chain with configured latencies.
///
/// # Errors
///
/// Returns an error if chain validation fails.
pub fn kitchen_chain_with(config: &KitchenConfig) -> Result<StageChain, ChainValidationError> {
    ChainBuilder::new("kitchen")
        .stage(Arc::new(PrepareStage::new(config.prepare())))
        .stage(Arc::new(BakeStage::new(config.bake())))
        .stage(Arc::new(CutStage::new(config.cut())))
        .stage(Arc::new(ServeStage::new(config.serve())))
        .build()
}

/// Builds the four-stage kitchen chain with default latencies.
///
/// # Errors
///
/// Returns an error if chain validation fails.
pub fn kitchen_chain() -> Result<StageChain, ChainValidationError> {
    kitchen_chain_with(&KitchenConfig::default())
}
