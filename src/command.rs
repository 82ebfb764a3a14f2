use std::fmt;
use std::io;

/// Built-in queries that the runner expands into platform-specific shell
/// invocations instead of running a literal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PseudoCommand {
    SystemInfo,
    MemoryInfo,
    IpAddress,
    Weather,
}

impl PseudoCommand {
    /// Reserved tag used when the command is shown to the user or logged.
    pub fn tag(self) -> &'static str {
        match self {
            PseudoCommand::SystemInfo => "get_system_info",
            PseudoCommand::MemoryInfo => "get_memory_info",
            PseudoCommand::IpAddress => "get_ip_address",
            PseudoCommand::Weather => "get_weather",
        }
    }
}

/// A command the assistant has decided to run.
///
/// User-provided text (aliases) is always [`ResolvedCommand::Literal`], so a
/// literal that happens to spell a reserved tag is still run verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedCommand {
    /// Shell command passed as-is to the [`ProcessExecutor`].
    Literal(String),
    /// Built-in query expanded by the runner.
    Pseudo(PseudoCommand),
}

impl ResolvedCommand {
    pub fn literal(command: impl Into<String>) -> Self {
        ResolvedCommand::Literal(command.into())
    }
}

impl fmt::Display for ResolvedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedCommand::Literal(s) => f.write_str(s),
            ResolvedCommand::Pseudo(p) => f.write_str(p.tag()),
        }
    }
}

/// Object-safe interface to whatever actually launches shell commands.
///
/// `Ok` carries the combined stdout/stderr of a command that was started,
/// whatever its exit status. `Err` means the command could not be started.
pub trait ProcessExecutor {
    fn run(&self, shell_command: &str) -> io::Result<String>;
}

impl<T: ProcessExecutor + ?Sized> ProcessExecutor for Box<T> {
    fn run(&self, shell_command: &str) -> io::Result<String> {
        (**self).run(shell_command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_tag_for_pseudo_commands() {
        assert_eq!(
            ResolvedCommand::Pseudo(PseudoCommand::Weather).to_string(),
            "get_weather"
        );
        assert_eq!(ResolvedCommand::literal("ls -la").to_string(), "ls -la");
    }

    #[test]
    fn literal_spelling_a_tag_is_not_pseudo() {
        let cmd = ResolvedCommand::literal("get_weather");
        assert_ne!(cmd, ResolvedCommand::Pseudo(PseudoCommand::Weather));
    }
}
