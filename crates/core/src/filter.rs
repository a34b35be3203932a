//! Target filter expressions
//!
//! A filter is either the `default` sentinel, which selects every known
//! target, or a colon-separated list of regular expressions. A leading `-`
//! inverts the whole expression so that only non-matching targets run.
//! Patterns match from the start of the target name, the same rule as
//! `--gtest_filter`-style prefixes: `d3d` selects `d3d11_compute` and
//! `d3d12_compute`.

use regex::Regex;
use tracing::{debug, warn};

use crate::{
    error::{Error, Result},
    targets::TargetSet,
};

pub const DEFAULT_FILTER: &str = "default";
pub const NEGATION_MARKER: char = '-';
pub const PATTERN_SEPARATOR: char = ':';

#[derive(Debug, Clone)]
pub enum FilterExpression {
    /// Every known target, in declared order
    All,
    Patterns { exclude: bool, patterns: Vec<Regex> },
}

impl FilterExpression {
    /// Empty colon segments (`"nbody:"`, `"::"`) are ignored rather than matching everything.
    pub fn parse(expr: &str) -> Result<Self> {
        if expr == DEFAULT_FILTER {
            return Ok(FilterExpression::All);
        }

        let (exclude, rest) = match expr.strip_prefix(NEGATION_MARKER) {
            Some(rest) => (true, rest),
            None => (false, expr),
        };

        let patterns = rest
            .split(PATTERN_SEPARATOR)
            .filter(|p| !p.is_empty())
            .map(|p| {
                Regex::new(&format!("^(?:{p})")).map_err(|source| Error::InvalidPattern {
                    pattern: p.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if patterns.is_empty() {
            if exclude {
                warn!("Filter '{}' has no patterns; every target is selected", expr);
            } else {
                warn!("Filter '{}' has no patterns; no target is selected", expr);
            }
        }

        debug!(
            "Parsed filter '{}': exclude={}, {} pattern(s)",
            expr,
            exclude,
            patterns.len()
        );
        Ok(FilterExpression::Patterns { exclude, patterns })
    }

    pub fn is_selected(&self, name: &str) -> bool {
        match self {
            FilterExpression::All => true,
            FilterExpression::Patterns { exclude, patterns } => {
                patterns.iter().any(|re| re.is_match(name)) != *exclude
            }
        }
    }
}

/// Targets from `targets` accepted by `filter`, in declared order.
pub fn select_targets<'a>(filter: &FilterExpression, targets: &'a TargetSet) -> Vec<&'a str> {
    targets.iter().filter(|t| filter.is_selected(t)).collect()
}
