//! Per-target option variants

use serde::{Deserialize, Serialize};
use std::fmt;

pub const TEST_TIME_SECONDS: u32 = 10;
pub const MSAA_COUNTS: [u32; 3] = [1, 4, 8];
pub const CLOSE_AFTER_SECONDS: u32 = 10;
pub const DISABLE_RENDER_PASS_FLAG: &str = "--disable-d3d12-render-pass";

/// One set of command-line arguments for a single target invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionVariant {
    pub args: Vec<String>,
}

impl OptionVariant {
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

impl fmt::Display for OptionVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.args.join(" "))
    }
}

/// Option variants for `target`, in execution order.
pub fn options_for(target: &str) -> Vec<OptionVariant> {
    match target {
        "aquarium" => MSAA_COUNTS
            .iter()
            .flat_map(|count| {
                let base = OptionVariant::empty()
                    .with_arg("--test-time")
                    .with_arg(TEST_TIME_SECONDS.to_string())
                    .with_arg("--msaa-count")
                    .with_arg(count.to_string());
                let no_render_pass = base.clone().with_arg(DISABLE_RENDER_PASS_FLAG);
                [base, no_render_pass]
            })
            .collect(),
        "asteroid" => vec![
            OptionVariant::empty()
                .with_arg("--close-after")
                .with_arg(CLOSE_AFTER_SECONDS.to_string()),
        ],
        _ => vec![OptionVariant::empty()],
    }
}
