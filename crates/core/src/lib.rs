//! gpumark - runs the GPU benchmark executables of a build and reports their results
//!
//! This crate provides functionality to:
//! - Select benchmark targets with include/exclude filter expressions
//! - Build the option sweeps each target is run with
//! - Invoke the executables and scrape `[RESULT]` lines from their output
//! - Describe the host system the numbers were taken on
pub mod command;
pub mod config;
pub mod error;
pub mod filter;
pub mod options;
pub mod platform;
pub mod result;
pub mod runner;
pub mod targets;

// Re-export commonly used types and traits
pub use error::{Error, Result};

// Re-export main API components
pub use command::{BenchCommand, CommandOutput, Executor, ProcessExecutor};
pub use config::{BuildType, Config};
pub use filter::{DEFAULT_FILTER, FilterExpression};
pub use options::OptionVariant;
pub use platform::{PlatformQuery, SystemInfo};
pub use result::ResultLine;
pub use runner::{BenchmarkRunner, RunSummary};
pub use targets::{TARGETS, TargetSet};
