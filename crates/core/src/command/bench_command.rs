use std::path::{Path, PathBuf};
use std::process::Command;

/// A single process invocation: program, structured arguments and environment.
///
/// Arguments are never joined into a shell string for execution;
/// `to_shell_command` exists for display and logging only.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
    pub env: Vec<(String, String)>,
}

impl BenchCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: None,
            env: Vec::new(),
        }
    }

    /// Path of `target`'s executable under `root_dir/out_dir`.
    pub fn target_path(root_dir: &Path, out_dir: &str, target: &str) -> PathBuf {
        root_dir
            .join(out_dir)
            .join(format!("{target}{}", std::env::consts::EXE_SUFFIX))
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn with_env(mut self, key: String, value: String) -> Self {
        self.env.push((key, value));
        self
    }

    pub fn to_shell_command(&self) -> String {
        let mut cmd = quote(&self.program.to_string_lossy());
        for arg in &self.args {
            cmd.push(' ');
            cmd.push_str(&quote(arg));
        }
        cmd
    }

    pub(crate) fn to_process(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);

        if let Some(ref dir) = self.working_dir {
            cmd.current_dir(dir);
        }

        for (key, value) in &self.env {
            cmd.env(key, value);
        }

        cmd
    }
}

fn quote(arg: &str) -> String {
    if arg.contains(' ') {
        format!("'{arg}'")
    } else {
        arg.to_string()
    }
}
