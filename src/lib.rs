//! gpumark - benchmark runner for the gpumark GPU test suite
//!
//! Re-exports [`gpumark_core`]; the `gpumark` binary lives in `gpumark-cli`.
pub use gpumark_core::*;
