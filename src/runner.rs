use crate::command::{ProcessExecutor, PseudoCommand, ResolvedCommand};
use crate::safety;

pub const BLOCKED_MESSAGE: &str = "⚠️ Sorry, this command has been blocked for safety reasons.";
pub const START_FAILURE_MESSAGE: &str = "❌ Error executing command.";
pub const NO_OUTPUT_MESSAGE: &str = "✅ Command executed successfully (no output).";
pub const WEATHER_UNAVAILABLE_MESSAGE: &str =
    "⚠️ Could not fetch weather data. Check internet connection.";

/// Executes resolved commands and turns every outcome into display text.
pub struct CommandRunner<E> {
    executor: E,
}

impl<E: ProcessExecutor> CommandRunner<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Run `command` and return its output, or one of the fixed messages.
    ///
    /// Literals that fail [`safety::is_safe`] are refused without reaching the
    /// executor. Pseudo commands are expanded from fixed, trusted invocations.
    pub fn execute(&self, command: &ResolvedCommand) -> String {
        match command {
            ResolvedCommand::Literal(text) => {
                if !safety::is_safe(text) {
                    tracing::warn!(command = %text, "refused unsafe command");
                    return BLOCKED_MESSAGE.to_string();
                }
                self.run_literal(text)
            }
            ResolvedCommand::Pseudo(kind) => self.run_pseudo(*kind),
        }
    }

    fn run_literal(&self, text: &str) -> String {
        match self.capture(text) {
            Some(out) if out.is_empty() => NO_OUTPUT_MESSAGE.to_string(),
            Some(out) => out,
            None => START_FAILURE_MESSAGE.to_string(),
        }
    }

    /// Raw output, `None` if the process could not be started.
    fn capture(&self, text: &str) -> Option<String> {
        match self.executor.run(text) {
            Ok(out) => Some(out),
            Err(e) => {
                tracing::error!(command = text, error = %e, "failed to start command");
                None
            }
        }
    }

    fn run_pseudo(&self, kind: PseudoCommand) -> String {
        tracing::debug!(tag = kind.tag(), "expanding pseudo command");
        match kind {
            PseudoCommand::SystemInfo => self.system_info(),
            PseudoCommand::MemoryInfo => self.run_literal(MEMORY_INFO),
            PseudoCommand::IpAddress => self.ip_address(),
            PseudoCommand::Weather => match self.capture(WEATHER) {
                Some(out) if !out.trim().is_empty() => out,
                _ => WEATHER_UNAVAILABLE_MESSAGE.to_string(),
            },
        }
    }

    #[cfg(any(windows, target_os = "macos"))]
    fn system_info(&self) -> String {
        self.run_literal(SYSTEM_INFO)
    }

    #[cfg(not(any(windows, target_os = "macos")))]
    fn system_info(&self) -> String {
        let os = self.run_literal("cat /etc/os-release | grep PRETTY_NAME");
        let kernel = self.run_literal("uname -a");
        format!("OS: {}\nKernel: {}", os, kernel)
    }

    #[cfg(windows)]
    fn ip_address(&self) -> String {
        self.run_literal("ipconfig | findstr IPv4")
    }

    #[cfg(not(windows))]
    fn ip_address(&self) -> String {
        let primary = self.capture("ip addr | grep 'inet ' | grep -v 127.0.0.1");
        match primary {
            Some(out) if !out.trim().is_empty() => out,
            _ => self.run_literal("ifconfig | grep 'inet ' | grep -v 127.0.0.1"),
        }
    }
}

#[cfg(windows)]
const SYSTEM_INFO: &str = "systeminfo";
#[cfg(target_os = "macos")]
const SYSTEM_INFO: &str = "system_profiler SPHardwareDataType SPSoftwareDataType";

#[cfg(windows)]
const MEMORY_INFO: &str = "wmic OS get FreePhysicalMemory,TotalVisibleMemorySize /Value";
#[cfg(target_os = "macos")]
const MEMORY_INFO: &str = "top -l 1 -s 0 | grep PhysMem";
#[cfg(not(any(windows, target_os = "macos")))]
const MEMORY_INFO: &str = "free -h";

const WEATHER: &str = "curl -s wttr.in/?format=3";

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::io;
    use std::rc::Rc;

    /// Executor that records every command and answers from a canned table.
    #[derive(Clone, Default)]
    pub(crate) struct FakeShell {
        pub calls: Rc<RefCell<Vec<String>>>,
        pub replies: Rc<RefCell<HashMap<String, String>>>,
        pub unstartable: bool,
    }

    impl FakeShell {
        pub fn reply(self, command: &str, output: &str) -> Self {
            self.replies
                .borrow_mut()
                .insert(command.to_string(), output.to_string());
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl ProcessExecutor for FakeShell {
        fn run(&self, shell_command: &str) -> io::Result<String> {
            self.calls.borrow_mut().push(shell_command.to_string());
            if self.unstartable {
                return Err(io::Error::new(io::ErrorKind::NotFound, "no shell"));
            }
            Ok(self
                .replies
                .borrow()
                .get(shell_command)
                .cloned()
                .unwrap_or_default())
        }
    }

    #[test]
    fn literal_output_is_returned_verbatim() {
        let shell = FakeShell::default().reply("ls -la", "total 0\n");
        let runner = CommandRunner::new(shell.clone());
        assert_eq!(runner.execute(&ResolvedCommand::literal("ls -la")), "total 0\n");
        assert_eq!(shell.calls(), vec!["ls -la"]);
    }

    #[test]
    fn unsafe_literal_never_reaches_executor() {
        let shell = FakeShell::default();
        let runner = CommandRunner::new(shell.clone());
        assert_eq!(
            runner.execute(&ResolvedCommand::literal("rm -rf /")),
            BLOCKED_MESSAGE
        );
        assert!(shell.calls().is_empty());
    }

    #[test]
    fn empty_output_becomes_success_sentinel() {
        let runner = CommandRunner::new(FakeShell::default());
        assert_eq!(
            runner.execute(&ResolvedCommand::literal("true")),
            NO_OUTPUT_MESSAGE
        );
    }

    #[test]
    fn start_failure_becomes_error_sentinel() {
        let shell = FakeShell {
            unstartable: true,
            ..FakeShell::default()
        };
        let runner = CommandRunner::new(shell);
        assert_eq!(
            runner.execute(&ResolvedCommand::literal("ls")),
            START_FAILURE_MESSAGE
        );
    }

    #[test]
    fn weather_without_output_reports_unavailable() {
        let shell = FakeShell::default();
        let runner = CommandRunner::new(shell.clone());
        assert_eq!(
            runner.execute(&ResolvedCommand::Pseudo(PseudoCommand::Weather)),
            WEATHER_UNAVAILABLE_MESSAGE
        );
        assert_eq!(shell.calls(), vec![WEATHER]);
    }

    #[test]
    fn weather_bypasses_denylist_for_internal_invocation() {
        let shell = FakeShell::default().reply(WEATHER, "Paris: ☀️ +21°C\n");
        let runner = CommandRunner::new(shell);
        assert_eq!(
            runner.execute(&ResolvedCommand::Pseudo(PseudoCommand::Weather)),
            "Paris: ☀️ +21°C\n"
        );
    }

    #[test]
    fn memory_info_runs_platform_query() {
        let shell = FakeShell::default().reply(MEMORY_INFO, "Mem: 16Gi\n");
        let runner = CommandRunner::new(shell.clone());
        assert_eq!(
            runner.execute(&ResolvedCommand::Pseudo(PseudoCommand::MemoryInfo)),
            "Mem: 16Gi\n"
        );
        assert_eq!(shell.calls(), vec![MEMORY_INFO]);
    }

    #[test]
    #[cfg(not(windows))]
    fn ip_address_falls_back_to_ifconfig() {
        let shell = FakeShell::default().reply(
            "ifconfig | grep 'inet ' | grep -v 127.0.0.1",
            "inet 192.168.1.7\n",
        );
        let runner = CommandRunner::new(shell.clone());
        assert_eq!(
            runner.execute(&ResolvedCommand::Pseudo(PseudoCommand::IpAddress)),
            "inet 192.168.1.7\n"
        );
        assert_eq!(shell.calls().len(), 2);
    }

    #[test]
    #[cfg(not(any(windows, target_os = "macos")))]
    fn system_info_combines_os_and_kernel() {
        let shell = FakeShell::default()
            .reply("cat /etc/os-release | grep PRETTY_NAME", "PRETTY_NAME=\"Debian\"")
            .reply("uname -a", "Linux box 6.1");
        let runner = CommandRunner::new(shell);
        assert_eq!(
            runner.execute(&ResolvedCommand::Pseudo(PseudoCommand::SystemInfo)),
            "OS: PRETTY_NAME=\"Debian\"\nKernel: Linux box 6.1"
        );
    }
}
