//! Stage trait and implementations.
//!
//! Stages are the units of work in a bakeflow chain. Each stage has a fixed,
//! non-zero latency and produces a token for the stage after it.

mod kitchen;

pub use kitchen::{
    kitchen_chain, kitchen_chain_with, BakeStage, CutStage, PrepareStage, ServeStage,
};

use crate::context::StageContext;
use crate::core::StageOutcome;
use async_trait::async_trait;
use std::fmt::Debug;
use std::time::Duration;

/// The default latency of a stage's simulated unit of work.
pub const DEFAULT_STAGE_DELAY: Duration = Duration::from_millis(1000);

/// Trait for chain stages.
///
/// A stage consumes the previous stage's token (through its context), waits
/// out its fixed latency, and reports an outcome. Stages never see each
/// other; the chain is the only coupling between them.
#[async_trait]
pub trait Stage: Send + Sync + Debug {
    /// Returns the name of the stage.
    fn name(&self) -> &str;

    /// Returns the fixed latency of the stage's simulated unit of work.
    fn work_duration(&self) -> Duration {
        DEFAULT_STAGE_DELAY
    }

    /// Produces the stage's outcome.
    ///
    /// Called after the stage's latency has elapsed. The outcome's token is
    /// handed to the next stage.
    async fn execute(&self, ctx: &StageContext) -> StageOutcome;
}

/// A function-based stage for tests and ad-hoc chains.
pub struct FnStage<F>
where
    F: Fn(&StageContext) -> StageOutcome + Send + Sync,
{
    name: String,
    work_duration: Duration,
    func: F,
}

impl<F> FnStage<F>
where
    F: Fn(&StageContext) -> StageOutcome + Send + Sync,
{
    /// Creates a new function-based stage with the default latency.
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            work_duration: DEFAULT_STAGE_DELAY,
            func,
        }
    }

    /// Sets the stage latency.
    #[must_use]
    pub fn with_work_duration(mut self, work_duration: Duration) -> Self {
        self.work_duration = work_duration;
        self
    }
}

impl<F> Debug for FnStage<F>
where
    F: Fn(&StageContext) -> StageOutcome + Send + Sync,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnStage")
            .field("name", &self.name)
            .field("work_duration", &self.work_duration)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<F> Stage for FnStage<F>
where
    F: Fn(&StageContext) -> StageOutcome + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn work_duration(&self) -> Duration {
        self.work_duration
    }

    async fn execute(&self, ctx: &StageContext) -> StageOutcome {
        (self.func)(ctx)
    }
}
