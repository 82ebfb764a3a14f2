use crate::command::ProcessExecutor;
use std::io;
use std::process::{Command, Stdio};

/// Runs commands through the platform shell (`sh -c` or `cmd /C`).
///
/// stderr is redirected into stdout inside the shell so the two streams keep
/// their relative order. Anything the shell itself prints to stderr (syntax
/// errors, unknown commands) is appended after that.
#[derive(Debug, Clone, Default)]
pub struct SystemShell;

impl SystemShell {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessExecutor for SystemShell {
    fn run(&self, shell_command: &str) -> io::Result<String> {
        let output = shell_invocation(shell_command)
            .stdin(Stdio::null())
            .output()?;
        tracing::debug!(
            command = shell_command,
            status = ?output.status.code(),
            "shell command finished"
        );
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(combined)
    }
}

#[cfg(not(windows))]
fn shell_invocation(shell_command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(format!("{} 2>&1", shell_command));
    cmd
}

#[cfg(windows)]
fn shell_invocation(shell_command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(format!("{} 2>&1", shell_command));
    cmd
}
