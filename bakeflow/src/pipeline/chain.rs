//! Sequential chain execution engine.
//!
//! Runs stages in insertion order with explicit token hand-off. Stage N+1
//! cannot start before stage N's outcome exists; the loop body is the only
//! place a token changes hands.

use super::{RunReport, StageRecord};
use crate::context::{RunContext, StageContext};
use crate::core::{StageEvent, StageStatus, StageToken};
use crate::errors::BakeflowError;
use crate::stages::Stage;
use std::sync::Arc;
use std::time::Instant;

/// The line appended after the last stage completes.
pub const FINAL_LINE: &str = "All steps completed!";

/// A fixed-order chain of stages.
///
/// Built by [`super::ChainBuilder`]. Running the chain awaits each stage's
/// fixed latency and outcome before the next stage starts; nothing executes
/// concurrently.
#[derive(Debug)]
pub struct StageChain {
    /// The chain name.
    name: String,
    /// Stages in execution order.
    stages: Vec<Arc<dyn Stage>>,
}

impl StageChain {
    pub(super) fn new(name: String, stages: Vec<Arc<dyn Stage>>) -> Self {
        Self { name, stages }
    }

    /// Returns the chain name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of stages.
    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Returns the stage names in execution order.
    #[must_use]
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Runs every stage in order and returns the run report.
    ///
    /// Each iteration builds the stage's context from the previous stage's
    /// token, emits `stage.started`, waits out the stage's fixed latency,
    /// awaits its outcome, and emits `stage.completed`. After the last stage
    /// the final line is appended and `chain.completed` is emitted exactly
    /// once.
    ///
    /// # Errors
    ///
    /// Returns [`BakeflowError::StageFailed`] if a stage reports failure;
    /// later stages never start. Returns [`BakeflowError::Internal`] if a
    /// stage reports a non-terminal status.
    pub async fn run(&self, ctx: Arc<RunContext>) -> Result<RunReport, BakeflowError> {
        let start = Instant::now();
        let mut lines = Vec::with_capacity(self.stages.len() + 1);
        let mut records = Vec::with_capacity(self.stages.len());
        let mut previous: Option<StageToken> = None;

        for (position, stage) in self.stages.iter().enumerate() {
            let input = previous.take();
            let stage_ctx =
                StageContext::new(Arc::clone(&ctx), stage.name(), position, input.clone());

            ctx.try_emit(StageEvent::started(stage.name()));

            let stage_start = Instant::now();
            tokio::time::sleep(stage.work_duration()).await;
            let outcome = stage.execute(&stage_ctx).await;
            let stage_duration_ms = stage_start.elapsed().as_secs_f64() * 1000.0;

            match outcome.status {
                StageStatus::Done => {
                    let line = outcome
                        .line
                        .clone()
                        .unwrap_or_else(|| format!("{} done", stage.name()));

                    ctx.try_emit(StageEvent::completed(stage.name(), stage_duration_ms, &line));

                    lines.push(line.clone());
                    previous.clone_from(&outcome.token);
                    records.push(StageRecord {
                        name: stage.name().to_string(),
                        status: outcome.status,
                        input,
                        output: outcome.token,
                        line: Some(line),
                        duration_ms: stage_duration_ms,
                    });
                }
                StageStatus::Fail => {
                    let reason = outcome
                        .error
                        .unwrap_or_else(|| "unspecified stage failure".to_string());

                    ctx.try_emit(StageEvent::failed(stage.name(), &reason));

                    return Err(BakeflowError::stage_failed(stage.name(), reason));
                }
                status => {
                    return Err(BakeflowError::Internal(format!(
                        "Stage '{}' returned non-terminal status '{status}'",
                        stage.name()
                    )));
                }
            }
        }

        lines.push(FINAL_LINE.to_string());

        let duration_ms = start.elapsed().as_secs_f64() * 1000.0;
        ctx.try_emit(StageEvent::chain_completed(&self.name, duration_ms));

        Ok(RunReport {
            chain: self.name.clone(),
            run_id: ctx.run_id(),
            lines,
            records,
            duration_ms,
            completed: true,
        })
    }
}
