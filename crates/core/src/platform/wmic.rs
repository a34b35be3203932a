use std::collections::BTreeMap;

use tracing::{debug, warn};

use super::{CPU, GPU, OS, PlatformQuery, SYSTEM, SystemInfo};
use crate::command::{BenchCommand, Executor};

/// `(category, wmic alias, comma-separated properties)`
const QUERIES: [(&str, &str, &str); 4] = [
    (
        CPU,
        "CPU",
        "MaxClockSpeed,Name,NumberOfEnabledCore,NumberOfLogicalProcessors",
    ),
    (
        GPU,
        "path win32_VideoController",
        "CurrentHorizontalResolution,CurrentVerticalResolution,DriverVersion,Name",
    ),
    (SYSTEM, "ComputerSystem", "TotalPhysicalMemory"),
    (OS, "OS", "OSArchitecture,Version"),
];

/// Queries Windows Management Instrumentation through `wmic`.
pub struct WmicQuery<E> {
    executor: E,
}

impl<E: Executor> WmicQuery<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    fn command(alias: &str, properties: &str) -> BenchCommand {
        BenchCommand::new("wmic")
            .with_args(alias.split_whitespace())
            .with_args(["get", properties, "/value"])
    }
}

impl<E: Executor> PlatformQuery for WmicQuery<E> {
    fn query(&self) -> SystemInfo {
        let mut categories = BTreeMap::new();

        for (category, alias, properties) in QUERIES {
            let command = Self::command(alias, properties);
            let props = match self.executor.execute(&command) {
                Ok(output) => parse_key_values(&output.text),
                Err(e) => {
                    warn!("Failed to query {}: {}", category, e);
                    BTreeMap::new()
                }
            };
            debug!("{}: {} properties", category, props.len());
            categories.insert(category.to_string(), props);
        }

        SystemInfo::from_categories(categories)
    }
}

/// Parses `key=value` lines, splitting at the last `=`. Other lines are skipped.
pub fn parse_key_values(text: &str) -> BTreeMap<String, String> {
    text.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter_map(|line| line.rsplit_once('='))
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
