//! End-to-end tests for chain execution.

#[cfg(test)]
mod tests {
    use crate::context::{RunContext, RunIdentity};
    use crate::core::{StageOutcome, StageToken};
    use crate::errors::BakeflowError;
    use crate::events::CollectingEventSink;
    use crate::pipeline::{ChainBuilder, FINAL_LINE};
    use crate::stages::{kitchen_chain, FnStage, Stage};
    use pretty_assertions::assert_eq;
    use tokio_test::assert_ok;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    fn run_ctx() -> Arc<RunContext> {
        Arc::new(RunContext::new(RunIdentity::new()))
    }

    fn run_ctx_with_sink(sink: Arc<CollectingEventSink>) -> Arc<RunContext> {
        Arc::new(RunContext::new(RunIdentity::new()).with_event_sink(sink))
    }

    #[tokio::test(start_paused = true)]
    async fn test_kitchen_lines_in_fixed_order() {
        let chain = kitchen_chain().unwrap();
        let report = chain.run(run_ctx()).await.unwrap();

        assert_eq!(
            report.lines(),
            &[
                "Dough is ready",
                "Pizza baked using dough",
                "Pizza cut: baked pizza",
                "Pizza served: cut pizza",
                FINAL_LINE,
            ]
        );
        assert!(report.is_complete());
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_input_is_prior_output() {
        let chain = kitchen_chain().unwrap();
        let report = chain.run(run_ctx()).await.unwrap();
        let records = report.records();

        assert_eq!(records.len(), 4);
        assert!(records[0].input.is_none());
        for pair in records.windows(2) {
            assert_eq!(pair[1].input, pair[0].output);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_stage_output_is_deterministic() {
        let chain = kitchen_chain().unwrap();
        let report = chain.run(run_ctx()).await.unwrap();

        assert_eq!(
            report.records()[0].output,
            Some(StageToken::new("prepare", "dough"))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_events_follow_stage_order() {
        let sink = Arc::new(CollectingEventSink::new());
        let chain = kitchen_chain().unwrap();
        chain.run(run_ctx_with_sink(sink.clone())).await.unwrap();

        let kinds: Vec<String> = sink.events().iter().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                "stage.started",
                "stage.completed",
                "stage.started",
                "stage.completed",
                "stage.started",
                "stage.completed",
                "stage.started",
                "stage.completed",
                "chain.completed",
            ]
        );

        let stages: Vec<String> = sink
            .events_of_kind("stage.started")
            .iter()
            .filter_map(|e| e.data.get("stage").and_then(|v| v.as_str().map(String::from)))
            .collect();
        assert_eq!(stages, vec!["prepare", "bake", "cut", "serve"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_chain_completes_exactly_once() {
        let sink = Arc::new(CollectingEventSink::new());
        let chain = kitchen_chain().unwrap();
        chain.run(run_ctx_with_sink(sink.clone())).await.unwrap();

        assert_eq!(sink.events_of_kind("chain.completed").len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_stage_waits_its_fixed_latency() {
        let chain = kitchen_chain().unwrap();

        let started = tokio::time::Instant::now();
        assert_ok!(chain.run(run_ctx()).await);

        // Four stages at 1000 ms each; the paused clock advances through the
        // sleeps without wall-time cost.
        assert!(started.elapsed() >= Duration::from_millis(4000));
    }

    #[tokio::test]
    async fn test_failing_stage_aborts_run() {
        let executed = Arc::new(AtomicUsize::new(0));
        let downstream_counter = executed.clone();

        let first: Arc<dyn Stage> = Arc::new(
            FnStage::new("first", |_ctx| {
                StageOutcome::done(StageToken::new("first", "first token"), "first done")
            })
            .with_work_duration(Duration::from_millis(1)),
        );
        let failing: Arc<dyn Stage> = Arc::new(
            FnStage::new("failing", |_ctx| StageOutcome::fail("burned"))
                .with_work_duration(Duration::from_millis(1)),
        );
        let downstream: Arc<dyn Stage> = Arc::new(
            FnStage::new("downstream", move |_ctx| {
                downstream_counter.fetch_add(1, Ordering::SeqCst);
                StageOutcome::done(StageToken::new("downstream", "x"), "downstream done")
            })
            .with_work_duration(Duration::from_millis(1)),
        );

        let sink = Arc::new(CollectingEventSink::new());
        let chain = ChainBuilder::new("faulty")
            .stage(first)
            .stage(failing)
            .stage(downstream)
            .build()
            .unwrap();

        let err = chain
            .run(run_ctx_with_sink(sink.clone()))
            .await
            .unwrap_err();

        match err {
            BakeflowError::StageFailed { stage, reason } => {
                assert_eq!(stage, "failing");
                assert_eq!(reason, "burned");
            }
            other => panic!("unexpected error: {other}"),
        }

        // The stage after the failure never ran, and no completion fired.
        assert_eq!(executed.load(Ordering::SeqCst), 0);
        assert_eq!(sink.events_of_kind("chain.completed").len(), 0);
        assert_eq!(sink.events_of_kind("stage.failed").len(), 1);
    }

    #[tokio::test]
    async fn test_custom_chain_threads_tokens() {
        let chain = ChainBuilder::new("relay")
            .stage(Arc::new(
                FnStage::new("seed", |_ctx| {
                    StageOutcome::done(StageToken::new("seed", "one"), "seed done")
                })
                .with_work_duration(Duration::from_millis(1)),
            ))
            .stage(Arc::new(
                FnStage::new("append", |ctx| {
                    let prev = ctx
                        .previous_token()
                        .map(StageToken::label)
                        .unwrap_or_default();
                    StageOutcome::done(
                        StageToken::new("append", format!("{prev} two")),
                        format!("append done using {prev}"),
                    )
                })
                .with_work_duration(Duration::from_millis(1)),
            ))
            .build()
            .unwrap();

        let report = chain.run(run_ctx()).await.unwrap();

        assert_eq!(
            report.records()[1].output,
            Some(StageToken::new("append", "one two"))
        );
        assert_eq!(report.lines()[1], "append done using one");
    }
}
