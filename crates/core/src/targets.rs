//! The fixed set of benchmark executables

use crate::error::{Error, Result};

/// Known benchmark targets, in default execution order.
pub const TARGETS: [&str; 6] = [
    "aquarium",
    "asteroid",
    "d3d11_compute",
    "d3d12_compute",
    "nbody",
    "vp_overlay",
];

/// Ordered, duplicate-free list of target names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSet {
    names: Vec<String>,
}

impl TargetSet {
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut collected: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if collected.contains(&name) {
                return Err(Error::DuplicateTarget(name));
            }
            collected.push(name);
        }
        Ok(Self { names: collected })
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}

impl Default for TargetSet {
    fn default() -> Self {
        Self {
            names: TARGETS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
