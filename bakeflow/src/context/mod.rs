//! Run and stage contexts.
//!
//! A [`RunContext`] is shared by every stage of one run; a [`StageContext`]
//! is built fresh for each stage and carries the hand-off token from its
//! predecessor.

mod identity;

pub use identity::RunIdentity;

use crate::core::{StageEvent, StageToken};
use crate::events::{get_event_sink, EventSink};
use crate::utils::{now_utc, Timestamp};
use std::sync::Arc;
use uuid::Uuid;

/// State shared by all stages of a single chain run.
pub struct RunContext {
    /// Run identity.
    identity: RunIdentity,
    /// Event sink for emitting completion signals.
    event_sink: Arc<dyn EventSink>,
    /// When the run context was created.
    started_at: Timestamp,
}

impl RunContext {
    /// Creates a new run context using the global event sink.
    #[must_use]
    pub fn new(identity: RunIdentity) -> Self {
        Self {
            identity,
            event_sink: get_event_sink(),
            started_at: now_utc(),
        }
    }

    /// Sets the event sink.
    #[must_use]
    pub fn with_event_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.event_sink = sink;
        self
    }

    /// Returns the run identity.
    #[must_use]
    pub fn identity(&self) -> &RunIdentity {
        &self.identity
    }

    /// Returns the run ID.
    #[must_use]
    pub fn run_id(&self) -> Option<Uuid> {
        self.identity.run_id
    }

    /// Returns when the run context was created.
    #[must_use]
    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    /// Emits an event through the configured sink without blocking.
    pub fn try_emit(&self, event: StageEvent) {
        self.event_sink.try_emit(event);
    }
}

impl std::fmt::Debug for RunContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunContext")
            .field("identity", &self.identity)
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}

/// What a single stage sees while executing.
///
/// Carries the previous stage's token; the first stage of a chain sees none.
#[derive(Debug)]
pub struct StageContext {
    /// The shared run context.
    run: Arc<RunContext>,
    /// The name of the executing stage.
    stage_name: String,
    /// The stage's position in the chain (0-based).
    position: usize,
    /// The token produced by the previous stage.
    previous: Option<StageToken>,
}

impl StageContext {
    /// Creates a new stage context.
    #[must_use]
    pub fn new(
        run: Arc<RunContext>,
        stage_name: impl Into<String>,
        position: usize,
        previous: Option<StageToken>,
    ) -> Self {
        Self {
            run,
            stage_name: stage_name.into(),
            position,
            previous,
        }
    }

    /// Returns the shared run context.
    #[must_use]
    pub fn run(&self) -> &Arc<RunContext> {
        &self.run
    }

    /// Returns the executing stage's name.
    #[must_use]
    pub fn stage_name(&self) -> &str {
        &self.stage_name
    }

    /// Returns the stage's position in the chain.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns true if this is the first stage of the chain.
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.position == 0
    }

    /// Returns the previous stage's token, if any.
    #[must_use]
    pub fn previous_token(&self) -> Option<&StageToken> {
        self.previous.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::CollectingEventSink;

    #[test]
    fn test_run_context_creation() {
        let ctx = RunContext::new(RunIdentity::new());
        assert!(ctx.run_id().is_some());
    }

    #[test]
    fn test_run_context_emits_to_sink() {
        let sink = Arc::new(CollectingEventSink::new());
        let ctx = RunContext::new(RunIdentity::new()).with_event_sink(sink.clone());

        ctx.try_emit(StageEvent::started("prepare"));

        assert_eq!(sink.len(), 1);
        assert_eq!(sink.events()[0].kind, "stage.started");
    }

    #[test]
    fn test_stage_context_first_stage() {
        let run = Arc::new(RunContext::new(RunIdentity::new()));
        let ctx = StageContext::new(run, "prepare", 0, None);

        assert!(ctx.is_first());
        assert!(ctx.previous_token().is_none());
        assert_eq!(ctx.stage_name(), "prepare");
    }

    #[test]
    fn test_stage_context_hand_off() {
        let run = Arc::new(RunContext::new(RunIdentity::new()));
        let token = StageToken::new("prepare", "dough");
        let ctx = StageContext::new(run, "bake", 1, Some(token));

        assert!(!ctx.is_first());
        assert_eq!(ctx.previous_token().map(StageToken::label), Some("dough"));
    }
}
