//! Host system information printed alongside benchmark results
//!
//! Collects CPU, GPU, memory and OS details into a read-only `SystemInfo`.
//! On Windows the data comes from `wmic` queries; elsewhere it is read from
//! `/proc` and `std::env::consts`, with GPU details left empty.

mod procfs;
mod wmic;

pub use procfs::ProcQuery;
pub use wmic::{WmicQuery, parse_key_values};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const CPU: &str = "CPU";
pub const GPU: &str = "GPU";
pub const SYSTEM: &str = "SYSTEM";
pub const OS: &str = "OS";

/// Category name to property name/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SystemInfo {
    categories: BTreeMap<String, BTreeMap<String, String>>,
}

impl SystemInfo {
    pub fn from_categories(categories: BTreeMap<String, BTreeMap<String, String>>) -> Self {
        Self { categories }
    }

    pub fn category(&self, name: &str) -> Option<&BTreeMap<String, String>> {
        self.categories.get(name)
    }

    pub fn get(&self, category: &str, property: &str) -> Option<&str> {
        self.categories
            .get(category)
            .and_then(|props| props.get(property))
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeMap<String, String>)> {
        self.categories.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.values().all(BTreeMap::is_empty)
    }
}

impl fmt::Display for SystemInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (category, props) in &self.categories {
            writeln!(f, "{category}:")?;
            for (key, value) in props {
                writeln!(f, "  {key}: {value}")?;
            }
        }
        Ok(())
    }
}

pub trait PlatformQuery {
    fn query(&self) -> SystemInfo;
}

/// The query appropriate for the platform gpumark was built for.
pub fn default_query() -> Box<dyn PlatformQuery> {
    if cfg!(windows) {
        Box::new(WmicQuery::new(crate::command::ProcessExecutor))
    } else {
        Box::new(ProcQuery::default())
    }
}
