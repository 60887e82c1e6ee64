//! # Bakeflow
//!
//! A strictly sequential stage chain with explicit token hand-off.
//!
//! Bakeflow models a fixed-order pipeline: each stage performs a simulated
//! unit of work with a fixed latency, announces completion with a console
//! line, and hands an opaque token to the next stage. No stage starts before
//! its predecessor's token exists, and nothing runs concurrently.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bakeflow::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let chain = kitchen_chain()?;
//! let ctx = Arc::new(RunContext::new(RunIdentity::new()));
//!
//! let report = chain.run(ctx).await?;
//! for line in report.lines() {
//!     println!("{line}");
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod context;
pub mod core;
pub mod errors;
pub mod events;
pub mod observability;
pub mod pipeline;
pub mod stages;
pub mod utils;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::KitchenConfig;
    pub use crate::context::{RunContext, RunIdentity, StageContext};
    pub use crate::core::{StageEvent, StageOutcome, StageStatus, StageToken};
    pub use crate::errors::{BakeflowError, ChainValidationError};
    pub use crate::events::{
        CollectingEventSink, EventSink, LoggingEventSink, NoOpEventSink,
    };
    pub use crate::pipeline::{
        ChainBuilder, RunReport, StageChain, StageRecord, FINAL_LINE,
    };
    pub use crate::stages::{
        kitchen_chain, kitchen_chain_with, BakeStage, CutStage, FnStage,
        PrepareStage, ServeStage, Stage,
    };
    pub use crate::utils::{iso_timestamp, Timestamp};
}
