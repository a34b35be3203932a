use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildType {
    Debug,
    #[default]
    Release,
}

impl BuildType {
    /// Name of the build output directory, e.g. `Release`.
    pub fn dir_name(self) -> &'static str {
        match self {
            BuildType::Debug => "Debug",
            BuildType::Release => "Release",
        }
    }

    /// Default output directory relative to the root, e.g. `out/Release`.
    pub fn default_out_dir(self) -> String {
        format!("out/{}", self.dir_name())
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildType::Debug => write!(f, "debug"),
            BuildType::Release => write!(f, "release"),
        }
    }
}
