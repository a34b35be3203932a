//! `[RESULT]` line extraction from benchmark output

use serde::{Deserialize, Serialize};

/// Prefix every benchmark executable writes before a reportable measurement.
pub const RESULT_MARKER: &str = "[RESULT] ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultLine {
    pub payload: String,
}

impl ResultLine {
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        line.strip_prefix(RESULT_MARKER).map(|payload| ResultLine {
            payload: payload.to_string(),
        })
    }
}

/// All result lines in `output`, in order of appearance.
pub fn extract_results(output: &str) -> Vec<ResultLine> {
    output.lines().filter_map(ResultLine::parse).collect()
}
