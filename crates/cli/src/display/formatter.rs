use gpumark_core::{OptionVariant, SystemInfo};

pub fn format_plan(plan: &[(String, Vec<OptionVariant>)]) -> String {
    if plan.is_empty() {
        return "No targets selected\n".to_string();
    }

    let mut out = String::new();
    for (target, options) in plan {
        out.push_str(target);
        out.push('\n');
        for option in options {
            if option.is_empty() {
                out.push_str("    (no options)\n");
            } else {
                out.push_str(&format!("    {option}\n"));
            }
        }
    }
    out
}

pub fn format_system_info(info: &SystemInfo) -> String {
    if info.is_empty() {
        return "System information unavailable\n".to_string();
    }
    let mut out = String::from("System information:\n");
    for line in info.to_string().lines() {
        out.push_str(&format!("  {line}\n"));
    }
    out
}
