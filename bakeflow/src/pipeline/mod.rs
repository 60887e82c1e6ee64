//! Chain building and execution.
//!
//! This module provides:
//! - The validated chain builder
//! - The sequential execution engine
//! - The run report

mod builder;
mod chain;
#[cfg(test)]
mod integration_tests;
mod report;

pub use builder::ChainBuilder;
pub use chain::{StageChain, FINAL_LINE};
pub use report::{RunReport, StageRecord};
