pub mod batch;
pub mod cli;
pub mod core;
pub mod engine;
pub mod logging;
pub mod primality;
pub mod services;

pub use crate::core::{CheckResult, ProcessingError, ProcessingResult, RunSummary, WorkItem};
pub use crate::engine::ProcessingEngine;
pub use crate::primality::{CheckAlgorithm, PrimalityChecker};
