//! Runs the kitchen chain and prints its ordered console lines.
//!
//! Usage: `kitchen [config.json]` where the optional JSON document overrides
//! per-stage latencies, e.g. `{"bake_ms": 250}`.

use anyhow::Result;
use bakeflow::config::KitchenConfig;
use bakeflow::context::{RunContext, RunIdentity};
use bakeflow::events::{set_event_sink, LoggingEventSink};
use bakeflow::observability::init_tracing;
use bakeflow::stages::kitchen_chain_with;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    set_event_sink(Arc::new(LoggingEventSink::default()));

    let config = match std::env::args().nth(1) {
        Some(path) => KitchenConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => KitchenConfig::default(),
    };

    let chain = kitchen_chain_with(&config)?;
    let ctx = Arc::new(RunContext::new(RunIdentity::new()));

    let report = chain.run(ctx).await?;

    for line in report.lines() {
        println!("{line}");
    }

    Ok(())
}
