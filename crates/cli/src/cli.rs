use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{info_command, list_command, test_command};

/// Run the gpumark benchmark executables and report their results
#[derive(Parser, Debug)]
#[command(name = "gpumark")]
#[command(version, about, long_about = None)]
#[command(subcommand_required = true, arg_required_else_help = true)]
#[command(after_help = "EXAMPLES:\n    \
    gpumark test\n    \
    gpumark test --test-target=\"-aquarium:nbody\"\n    \
    gpumark --is-debug list --test-target \"d3d.*\"\n\n\
ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Path to a gpumark.json config (defaults to searching upwards from the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Checkout root containing the build output directory
    #[arg(long, global = true)]
    pub root_dir: Option<PathBuf>,

    /// Build output directory relative to the root (defaults to out/Release or out/Debug)
    #[arg(long, global = true)]
    pub out_dir: Option<String>,

    /// Use the debug build output
    #[arg(long = "is-debug", global = true)]
    pub is_debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the selected benchmarks and print their results
    #[command(visible_alias = "t")]
    Test {
        /// Targets to run: "default", or colon-separated regexes; a leading '-' excludes matches
        #[arg(long, default_value = gpumark_core::DEFAULT_FILTER, allow_hyphen_values = true)]
        test_target: String,

        /// Print the commands without executing them
        #[arg(short, long)]
        dry_run: bool,
    },
    /// List the selected targets and their option variants
    #[command(visible_alias = "l")]
    List {
        /// Same syntax as `test --test-target`
        #[arg(long, default_value = gpumark_core::DEFAULT_FILTER, allow_hyphen_values = true)]
        test_target: String,
    },
    /// Show information about the host system
    Info {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self, global: &GlobalArgs) -> Result<()> {
        match self {
            Commands::Test {
                test_target,
                dry_run,
            } => test_command(global, &test_target, dry_run),
            Commands::List { test_target } => list_command(global, &test_target),
            Commands::Info { json } => info_command(json),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negated_filter_is_accepted_as_value() {
        let cli = Cli::try_parse_from(["gpumark", "test", "--test-target", "-aquarium"]).unwrap();
        match cli.command {
            Commands::Test { test_target, .. } => assert_eq!(test_target, "-aquarium"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["gpumark", "list"]).unwrap();
        assert!(!cli.global.is_debug);
        assert!(cli.global.root_dir.is_none());
        match cli.command {
            Commands::List { test_target } => assert_eq!(test_target, "default"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["gpumark", "t", "--dry-run", "--is-debug", "--root-dir", "/src"])
                .unwrap();
        assert!(cli.global.is_debug);
        assert_eq!(cli.global.root_dir, Some(PathBuf::from("/src")));
        assert!(matches!(cli.command, Commands::Test { dry_run: true, .. }));
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
