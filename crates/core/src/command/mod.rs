//! Benchmark command construction and execution

pub mod bench_command;
pub mod executor;

// Re-export commonly used types
pub use bench_command::BenchCommand;
pub use executor::{CommandOutput, Executor, ProcessExecutor};
