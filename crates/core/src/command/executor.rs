use std::io::{self, Read};
use std::process::Stdio;

use tracing::debug;

use super::BenchCommand;

/// Captured result of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was terminated by a signal
    pub status: Option<i32>,
    pub success: bool,
    /// stdout and stderr interleaved in the order they were written
    pub text: String,
}

impl CommandOutput {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            status: Some(0),
            success: true,
            text: text.into(),
        }
    }

    pub fn failure(code: i32, text: impl Into<String>) -> Self {
        Self {
            status: Some(code),
            success: false,
            text: text.into(),
        }
    }
}

/// Runs a command to completion and captures its output.
///
/// A non-zero exit is reported through `CommandOutput`, not as an error;
/// `Err` means the process could not be run at all.
pub trait Executor {
    fn execute(&self, command: &BenchCommand) -> io::Result<CommandOutput>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

impl Executor for ProcessExecutor {
    fn execute(&self, command: &BenchCommand) -> io::Result<CommandOutput> {
        debug!("Spawning: {}", command.to_shell_command());

        // One pipe shared by stdout and stderr keeps their lines in write order
        let (mut reader, writer) = os_pipe::pipe()?;
        let mut process = command.to_process();
        process
            .stdin(Stdio::null())
            .stdout(writer.try_clone()?)
            .stderr(writer);

        let mut child = process.spawn()?;
        // The parent's copies of the write end must close before reading to EOF
        drop(process);

        let mut raw = Vec::new();
        let read = reader.read_to_end(&mut raw);
        let status = child.wait()?;
        read?;

        Ok(CommandOutput {
            status: status.code(),
            success: status.success(),
            text: String::from_utf8_lossy(&raw).into_owned(),
        })
    }
}

impl<E: Executor + ?Sized> Executor for &E {
    fn execute(&self, command: &BenchCommand) -> io::Result<CommandOutput> {
        (**self).execute(command)
    }
}
