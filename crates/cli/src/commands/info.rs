use anyhow::{Context, Result};
use gpumark_core::platform;

use crate::display::format_system_info;

pub fn info_command(json: bool) -> Result<()> {
    let system = platform::default_query().query();

    if json {
        let rendered =
            serde_json::to_string_pretty(&system).context("Failed to serialize system info")?;
        println!("{rendered}");
    } else {
        print!("{}", format_system_info(&system));
    }
    Ok(())
}
