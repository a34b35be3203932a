use anyhow::{Context, Result};
use gpumark_core::{BuildType, Config};
use std::{env, path::PathBuf};
use tracing::debug;

use crate::cli::GlobalArgs;

/// Loads the config file (explicit or discovered) and applies command-line overrides.
///
/// Returns the config together with the current directory it resolves against.
pub fn load_config(global: &GlobalArgs) -> Result<(Config, PathBuf)> {
    let cwd = env::current_dir().context("Failed to get current directory")?;

    let path = match &global.config {
        Some(path) => Some(path.clone()),
        None => Config::find_config_file(&cwd),
    };

    let mut config = match path {
        Some(path) => {
            debug!("Loading config from {}", path.display());
            Config::load_from_file(&path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?
        }
        None => Config::default(),
    };

    apply_overrides(&mut config, global, &cwd);
    Ok((config, cwd))
}

fn apply_overrides(config: &mut Config, global: &GlobalArgs, cwd: &std::path::Path) {
    if let Some(ref root) = global.root_dir {
        config.root_dir = Some(cwd.join(root));
    }
    if let Some(ref out_dir) = global.out_dir {
        config.out_dir = Some(out_dir.clone());
    }
    if global.is_debug {
        config.build_type = BuildType::Debug;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_flags_override_file_values() {
        let mut config = Config {
            root_dir: Some(PathBuf::from("/from/file")),
            out_dir: Some("out/File".to_string()),
            ..Default::default()
        };
        let global = GlobalArgs {
            root_dir: Some(PathBuf::from("checkout")),
            is_debug: true,
            ..Default::default()
        };

        apply_overrides(&mut config, &global, Path::new("/work"));
        assert_eq!(config.root_dir, Some(PathBuf::from("/work/checkout")));
        assert_eq!(config.out_dir.as_deref(), Some("out/File"));
        assert_eq!(config.build_type, BuildType::Debug);
    }

    #[test]
    fn test_debug_flag_changes_default_out_dir() {
        let mut config = Config::default();
        let global = GlobalArgs {
            is_debug: true,
            ..Default::default()
        };
        apply_overrides(&mut config, &global, Path::new("/work"));
        assert_eq!(config.resolve_out_dir(), "out/Debug");
    }
}
