use std::collections::BTreeMap;
use std::path::PathBuf;

use super::{CPU, GPU, OS, PlatformQuery, SYSTEM, SystemInfo};

/// Reads host details from procfs. Missing files yield empty categories.
#[derive(Debug, Clone)]
pub struct ProcQuery {
    cpuinfo: PathBuf,
    meminfo: PathBuf,
}

impl Default for ProcQuery {
    fn default() -> Self {
        Self {
            cpuinfo: PathBuf::from("/proc/cpuinfo"),
            meminfo: PathBuf::from("/proc/meminfo"),
        }
    }
}

impl ProcQuery {
    pub fn with_paths(cpuinfo: impl Into<PathBuf>, meminfo: impl Into<PathBuf>) -> Self {
        Self {
            cpuinfo: cpuinfo.into(),
            meminfo: meminfo.into(),
        }
    }
}

impl PlatformQuery for ProcQuery {
    fn query(&self) -> SystemInfo {
        let cpu = std::fs::read_to_string(&self.cpuinfo)
            .map(|content| parse_cpuinfo(&content))
            .unwrap_or_default();
        let system = std::fs::read_to_string(&self.meminfo)
            .map(|content| parse_meminfo(&content))
            .unwrap_or_default();

        let os = BTreeMap::from([
            ("Name".to_string(), std::env::consts::OS.to_string()),
            (
                "OSArchitecture".to_string(),
                std::env::consts::ARCH.to_string(),
            ),
        ]);

        SystemInfo::from_categories(BTreeMap::from([
            (CPU.to_string(), cpu),
            (GPU.to_string(), BTreeMap::new()),
            (SYSTEM.to_string(), system),
            (OS.to_string(), os),
        ]))
    }
}

fn field<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    let (key, value) = line.split_once(':')?;
    (key.trim() == name).then(|| value.trim())
}

fn parse_cpuinfo(content: &str) -> BTreeMap<String, String> {
    let mut props = BTreeMap::new();

    if let Some(name) = content.lines().find_map(|l| field(l, "model name")) {
        props.insert("Name".to_string(), name.to_string());
    }

    let logical = content
        .lines()
        .filter(|l| field(l, "processor").is_some())
        .count();
    if logical > 0 {
        props.insert(
            "NumberOfLogicalProcessors".to_string(),
            logical.to_string(),
        );
    }

    props
}

fn parse_meminfo(content: &str) -> BTreeMap<String, String> {
    content
        .lines()
        .find_map(|l| field(l, "MemTotal"))
        .and_then(|value| value.trim_end_matches("kB").trim().parse::<u64>().ok())
        .map(|kb| {
            let bytes = kb.saturating_mul(1024);
            BTreeMap::from([("TotalPhysicalMemory".to_string(), bytes.to_string())])
        })
        .unwrap_or_default()
}
