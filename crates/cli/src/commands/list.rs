use anyhow::{Context, Result};
use gpumark_core::BenchmarkRunner;

use crate::cli::GlobalArgs;
use crate::config::load_config;
use crate::display::format_plan;

pub fn list_command(global: &GlobalArgs, filter: &str) -> Result<()> {
    let (config, cwd) = load_config(global)?;
    let runner = BenchmarkRunner::from_config(&config, &cwd);

    let plan = runner
        .plan(filter)
        .with_context(|| format!("Invalid test target filter: {filter}"))?;

    print!("{}", format_plan(&plan));
    Ok(())
}
