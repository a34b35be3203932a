//! Benchmark runner: selects targets, invokes each option variant and
//! streams `[RESULT]` payloads to the output sink

use crate::{
    command::{BenchCommand, Executor, ProcessExecutor},
    config::Config,
    error::Result,
    filter::{FilterExpression, select_targets},
    options::{OptionVariant, options_for},
    result::{ResultLine, extract_results},
    targets::TargetSet,
};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Counters for one `run`, used for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub invocations: usize,
    /// Invocations that printed no result line
    pub empty_invocations: usize,
    pub results: usize,
}

pub struct BenchmarkRunner<E = ProcessExecutor, W = io::Stdout> {
    targets: TargetSet,
    root_dir: PathBuf,
    out_dir: String,
    env: Vec<(String, String)>,
    executor: E,
    out: W,
}

impl BenchmarkRunner {
    /// Runner that spawns real processes and prints to stdout.
    pub fn from_config(config: &Config, cwd: &Path) -> Self {
        Self::new(
            config.resolve_root_dir(cwd),
            config.resolve_out_dir(),
            ProcessExecutor,
            io::stdout(),
        )
        .with_env(config.env.clone())
    }
}

impl<E: Executor, W: Write> BenchmarkRunner<E, W> {
    pub fn new(
        root_dir: impl Into<PathBuf>,
        out_dir: impl Into<String>,
        executor: E,
        out: W,
    ) -> Self {
        Self {
            targets: TargetSet::default(),
            root_dir: root_dir.into(),
            out_dir: out_dir.into(),
            env: Vec::new(),
            executor,
            out,
        }
    }

    pub fn with_targets(mut self, targets: TargetSet) -> Self {
        self.targets = targets;
        self
    }

    pub fn with_env<I>(mut self, env: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.env.extend(env);
        self
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn out_dir(&self) -> &str {
        &self.out_dir
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn select_targets(&self, filter: &str) -> Result<Vec<&str>> {
        let filter = FilterExpression::parse(filter)?;
        Ok(select_targets(&filter, &self.targets))
    }

    pub fn options_for(&self, target: &str) -> Vec<OptionVariant> {
        options_for(target)
    }

    /// Selected targets with their option variants, without running anything.
    pub fn plan(&self, filter: &str) -> Result<Vec<(String, Vec<OptionVariant>)>> {
        Ok(self
            .select_targets(filter)?
            .into_iter()
            .map(|t| (t.to_string(), self.options_for(t)))
            .collect())
    }

    pub fn command_for(&self, target: &str, option: &OptionVariant) -> BenchCommand {
        let program = BenchCommand::target_path(&self.root_dir, &self.out_dir, target);
        let mut cmd = BenchCommand::new(program)
            .with_args(option.args.iter().cloned())
            .with_working_dir(&self.root_dir);

        for (key, value) in &self.env {
            cmd = cmd.with_env(key.clone(), value.clone());
        }
        cmd
    }

    /// Runs one invocation and prints every result payload as it is found.
    ///
    /// Failing or missing executables are logged and produce no results;
    /// only a failure to write to the output sink is returned as an error.
    pub fn run_and_collect(
        &mut self,
        target: &str,
        option: &OptionVariant,
    ) -> Result<Vec<ResultLine>> {
        let command = self.command_for(target, option);
        info!("Running: {}", command.to_shell_command());

        let output = match self.executor.execute(&command) {
            Ok(output) => output,
            Err(e) => {
                warn!("Failed to run {} [{}]: {}", target, option, e);
                return Ok(Vec::new());
            }
        };

        if !output.success {
            warn!(
                "{} [{}] exited with status {:?}",
                target, option, output.status
            );
        }

        let results = extract_results(&output.text);
        for result in &results {
            writeln!(self.out, "{}", result.payload)?;
        }
        self.out.flush()?;

        debug!("{} [{}]: {} result line(s)", target, option, results.len());
        Ok(results)
    }

    pub fn run(&mut self, filter: &str) -> Result<RunSummary> {
        let plan = self.plan(filter)?;
        let mut summary = RunSummary::default();

        for (target, options) in &plan {
            for option in options {
                let results = self.run_and_collect(target, option)?;
                summary.invocations += 1;
                if results.is_empty() {
                    summary.empty_invocations += 1;
                }
                summary.results += results.len();
            }
        }

        info!(
            "Finished {} invocation(s) across {} target(s), {} result(s)",
            summary.invocations,
            plan.len(),
            summary.results
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandOutput;
    use crate::error::Error;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Records invocations and answers from a per-target script.
    #[derive(Default)]
    struct FakeExecutor {
        outputs: HashMap<String, io::Result<CommandOutput>>,
        calls: RefCell<Vec<BenchCommand>>,
    }

    impl FakeExecutor {
        fn with(mut self, target: &str, output: io::Result<CommandOutput>) -> Self {
            self.outputs.insert(target.to_string(), output);
            self
        }
    }

    impl Executor for FakeExecutor {
        fn execute(&self, command: &BenchCommand) -> io::Result<CommandOutput> {
            self.calls.borrow_mut().push(command.clone());
            let stem = command
                .program
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default();
            match self.outputs.get(stem) {
                Some(Ok(output)) => Ok(output.clone()),
                Some(Err(e)) => Err(io::Error::new(e.kind(), e.to_string())),
                None => Ok(CommandOutput::success("")),
            }
        }
    }

    fn runner(executor: FakeExecutor) -> BenchmarkRunner<FakeExecutor, Vec<u8>> {
        BenchmarkRunner::new("/gpumark", "out/Release", executor, Vec::new())
    }

    fn printed(runner: BenchmarkRunner<FakeExecutor, Vec<u8>>) -> String {
        String::from_utf8(runner.into_output()).unwrap()
    }

    #[test]
    fn test_run_and_collect_prints_payloads() {
        let executor = FakeExecutor::default().with(
            "nbody",
            Ok(CommandOutput::success("foo\n[RESULT] 123.4 fps\nbar\n")),
        );
        let mut runner = runner(executor);

        let results = runner
            .run_and_collect("nbody", &OptionVariant::empty())
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].payload, "123.4 fps");
        assert_eq!(printed(runner), "123.4 fps\n");
    }

    #[test]
    fn test_non_zero_exit_is_swallowed() {
        let executor = FakeExecutor::default().with(
            "nbody",
            Ok(CommandOutput::failure(1, "[RESULT] partial\ncrash\n")),
        );
        let mut runner = runner(executor);

        let results = runner
            .run_and_collect("nbody", &OptionVariant::empty())
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(printed(runner), "partial\n");
    }

    #[test]
    fn test_spawn_failure_is_swallowed() {
        let executor = FakeExecutor::default().with(
            "nbody",
            Err(io::Error::new(io::ErrorKind::NotFound, "no such file")),
        );
        let mut runner = runner(executor);

        let results = runner
            .run_and_collect("nbody", &OptionVariant::empty())
            .unwrap();
        assert!(results.is_empty());
        assert_eq!(printed(runner), "");
    }

    #[test]
    fn test_command_for_builds_structured_invocation() {
        let runner = runner(FakeExecutor::default())
            .with_env([("DAWN_DEBUG".to_string(), "1".to_string())]);
        let options = runner.options_for("aquarium");

        let cmd = runner.command_for("aquarium", &options[1]);
        assert_eq!(
            cmd.program,
            BenchCommand::target_path(Path::new("/gpumark"), "out/Release", "aquarium")
        );
        assert_eq!(
            cmd.args,
            vec![
                "--test-time",
                "10",
                "--msaa-count",
                "1",
                "--disable-d3d12-render-pass"
            ]
        );
        assert_eq!(cmd.working_dir.as_deref(), Some(Path::new("/gpumark")));
        assert_eq!(cmd.env, vec![("DAWN_DEBUG".to_string(), "1".to_string())]);
    }

    #[test]
    fn test_run_visits_targets_and_variants_in_order() {
        let executor = FakeExecutor::default()
            .with("aquarium", Ok(CommandOutput::success("[RESULT] FPS:60\n")))
            .with("asteroid", Ok(CommandOutput::failure(2, "boom\n")));
        let mut runner = runner(executor);

        let summary = runner.run("a").unwrap();
        assert_eq!(
            summary,
            RunSummary {
                invocations: 7,
                empty_invocations: 1,
                results: 6,
            }
        );

        let calls: Vec<String> = runner
            .executor()
            .calls
            .borrow()
            .iter()
            .map(|c| {
                let stem = c.program.file_stem().unwrap().to_string_lossy();
                format!("{} {}", stem, c.args.join(" "))
            })
            .collect();
        insta::assert_debug_snapshot!(calls, @r#"
        [
            "aquarium --test-time 10 --msaa-count 1",
            "aquarium --test-time 10 --msaa-count 1 --disable-d3d12-render-pass",
            "aquarium --test-time 10 --msaa-count 4",
            "aquarium --test-time 10 --msaa-count 4 --disable-d3d12-render-pass",
            "aquarium --test-time 10 --msaa-count 8",
            "aquarium --test-time 10 --msaa-count 8 --disable-d3d12-render-pass",
            "asteroid --close-after 10",
        ]
        "#);

        assert_eq!(printed(runner), "FPS:60\n".repeat(6));
    }

    #[test]
    fn test_default_filter_runs_every_target_once_per_variant() {
        let mut runner = runner(FakeExecutor::default());
        let summary = runner.run("default").unwrap();
        // 6 aquarium variants + 1 for each of the other five targets
        assert_eq!(summary.invocations, 11);
        assert_eq!(summary.results, 0);
    }

    #[test]
    fn test_invalid_filter_aborts_before_running() {
        let mut runner = runner(FakeExecutor::default());
        let err = runner.run("nbody:(").unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { .. }));
        assert!(runner.executor().calls.borrow().is_empty());
    }

    #[test]
    fn test_plan_uses_custom_target_set() {
        let runner = runner(FakeExecutor::default())
            .with_targets(TargetSet::new(["nbody", "asteroid"]).unwrap());
        let plan = runner.plan("-nbody").unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].0, "asteroid");
        assert_eq!(plan[0].1[0].to_string(), "--close-after 10");
    }
}
