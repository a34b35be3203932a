//! Configuration management for gpumark

mod build_type;
mod settings;

// Re-export main types
pub use build_type::BuildType;
pub use settings::{CONFIG_FILE_NAMES, Config};
