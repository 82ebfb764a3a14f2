//! Denylist check applied before anything is handed to the shell.
//!
//! This is a substring heuristic against the most common destructive
//! invocations. It is not a sandbox.

/// Substrings that disqualify a command. Compared against the lowercased
/// command, so entries are lowercase.
pub const DANGEROUS_PATTERNS: &[&str] = &[
    "rm -rf",
    "rmdir /s",
    "deltree",
    "format",
    "shutdown",
    "reboot",
    ":(){:|:&};:",
    "fork bomb",
    "dd if=/dev/zero",
    "chmod -r 777",
    "mkfs",
    "> /dev/sda",
    "> /dev/hda",
    "wget",
    "curl | sh",
];

/// Returns `false` if `command` contains any of [`DANGEROUS_PATTERNS`],
/// ignoring case.
pub fn is_safe(command: &str) -> bool {
    let lower = command.to_lowercase();
    !DANGEROUS_PATTERNS.iter().any(|p| lower.contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_is_rejected_in_any_case() {
        for pattern in DANGEROUS_PATTERNS {
            let cmd = format!("echo start; {} /something", pattern.to_uppercase());
            assert!(!is_safe(&cmd), "{:?} should be unsafe", cmd);
            assert!(!is_safe(pattern));
        }
    }

    #[test]
    fn recursive_chmod_is_caught_with_capital_r() {
        assert!(!is_safe("chmod -R 777 /"));
    }

    #[test]
    fn ordinary_commands_are_safe() {
        for cmd in ["ls -la", "pwd", "ps aux", "df -h", "git status", "date +\"%T\""] {
            assert!(is_safe(cmd), "{:?} should be safe", cmd);
        }
    }

    #[test]
    fn substring_match_ignores_word_boundaries() {
        assert!(!is_safe("echo reformatted"));
        assert!(!is_safe("sudo   RM -RF /tmp/x"));
    }

    #[test]
    fn empty_command_is_safe() {
        assert!(is_safe(""));
    }
}
