//! Shell command execution with buffered output capture
//!
//! Each call spawns one process through the host shell and waits for it to
//! exit. Both output streams are drained concurrently into memory, so the
//! buffers are only available once the process has terminated.

use std::process::Stdio;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};

use crate::error::TaskError;

/// Shell program and the flag that makes it run a command string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    pub program: String,
    pub flag: String,
}

impl Shell {
    pub fn new(program: impl Into<String>, flag: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            flag: flag.into(),
        }
    }
}

impl Default for Shell {
    #[cfg(windows)]
    fn default() -> Self {
        Self::new("cmd", "/C")
    }

    #[cfg(not(windows))]
    fn default() -> Self {
        Self::new("sh", "-c")
    }
}

/// Outcome of a command that ran to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the process exited with code 0
    pub success: bool,
    /// Raw standard output
    pub stdout: Vec<u8>,
    /// Raw standard error
    pub stderr: Vec<u8>,
}

impl CommandResult {
    /// Standard output decoded lossily as UTF-8
    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    /// Standard error decoded lossily as UTF-8
    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

/// Execute a command string through the host shell
///
/// The string is passed verbatim; quoting is the caller's responsibility.
///
/// # Errors
/// * `TaskError::SpawnFailed` - If the shell itself couldn't be spawned
/// * `TaskError::Io` - If waiting on the process or its pipes failed
pub async fn execute(command: &str) -> Result<CommandResult, TaskError> {
    execute_with(&Shell::default(), command).await
}

/// Execute a command string through the given shell
pub async fn execute_with(shell: &Shell, command: &str) -> Result<CommandResult, TaskError> {
    let mut cmd = Command::new(&shell.program);
    cmd.arg(&shell.flag).arg(command);
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    tracing::debug!("Executing: {} {} {:?}", shell.program, shell.flag, command);

    let child = cmd.spawn().map_err(|e| TaskError::SpawnFailed {
        command: command.to_string(),
        error: e.to_string(),
    })?;

    wait_for_output(child).await
}

/// Wait for a child process and capture its output
async fn wait_for_output(mut child: Child) -> Result<CommandResult, TaskError> {
    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    // Drain both pipes while waiting so a full pipe can't block the child
    let (status, stdout, stderr) =
        tokio::try_join!(child.wait(), read_all(stdout), read_all(stderr))?;

    Ok(CommandResult {
        success: status.code() == Some(0),
        stdout,
        stderr,
    })
}

async fn read_all<R: AsyncRead + Unpin>(reader: Option<R>) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if let Some(mut reader) = reader {
        reader.read_to_end(&mut buf).await?;
    }
    Ok(buf)
}
