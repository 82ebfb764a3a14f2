//! Keyword + regex intent table mapping free text to commands.

use crate::command::{PseudoCommand, ResolvedCommand};
use regex::Regex;

/// One entry of the intent table.
///
/// Matches when any keyword is a substring of the lowercased input and, if
/// `confirming` is non-empty, at least one of those patterns also matches.
#[derive(Debug, Clone)]
pub struct CommandPattern {
    keywords: Vec<String>,
    confirming: Vec<Regex>,
    command: ResolvedCommand,
}

impl CommandPattern {
    /// Build a rule, compiling its confirming patterns.
    pub fn new(
        keywords: &[&str],
        confirming: &[&str],
        command: ResolvedCommand,
    ) -> Result<Self, regex::Error> {
        let confirming = confirming
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            confirming,
            command,
        })
    }

    fn matches(&self, lower_input: &str) -> bool {
        self.keywords.iter().any(|k| lower_input.contains(k.as_str()))
            && (self.confirming.is_empty()
                || self.confirming.iter().any(|re| re.is_match(lower_input)))
    }
}

/// Ordered rule list; earlier rules take precedence.
#[derive(Debug, Clone)]
pub struct IntentMatcher {
    rules: Vec<CommandPattern>,
}

impl IntentMatcher {
    /// Matcher over the built-in rule table.
    pub fn builtin() -> Result<Self, regex::Error> {
        Ok(Self::with_rules(builtin_rules()?))
    }

    pub fn with_rules(rules: Vec<CommandPattern>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[CommandPattern] {
        &self.rules
    }

    /// Command of the first rule matching `input`, if any.
    pub fn interpret(&self, input: &str) -> Option<ResolvedCommand> {
        let lower = input.to_lowercase();
        let found = self.rules.iter().find(|rule| rule.matches(&lower));
        if let Some(rule) = found {
            tracing::debug!(input, command = %rule.command, "intent matched");
        }
        found.map(|rule| rule.command.clone())
    }
}

/// Picks the Windows or the Unix spelling of a command.
macro_rules! platform {
    (windows: $win:expr, unix: $unix:expr $(,)?) => {
        if cfg!(windows) { $win } else { $unix }
    };
}

fn literal(s: &str) -> ResolvedCommand {
    ResolvedCommand::literal(s)
}

/// The default intent table, in priority order.
pub fn builtin_rules() -> Result<Vec<CommandPattern>, regex::Error> {
    use PseudoCommand::*;
    Ok(vec![
        CommandPattern::new(
            &["time", "current time", "what time"],
            &["what.*time.*it", "tell.*time"],
            literal(platform!(windows: "time /t", unix: "date +\"%T\"")),
        )?,
        CommandPattern::new(
            &["date", "today", "day", "current date"],
            &["what.*date", "what day.*is", "today.*date"],
            literal(platform!(windows: "date /t", unix: "date +\"%A, %B %d, %Y\"")),
        )?,
        CommandPattern::new(
            &["calendar", "month", "cal"],
            &["show.*calendar", "month.*calendar"],
            literal(platform!(windows: "powershell -Command \"Get-Calendar\"", unix: "cal")),
        )?,
        CommandPattern::new(
            &["files", "list", "directory", "folder", "ls", "dir"],
            &["show.*files", "list.*files", "what.*files"],
            literal(platform!(windows: "dir", unix: "ls -la")),
        )?,
        CommandPattern::new(
            &["current", "directory", "folder", "pwd", "location"],
            &["(current|working|present).*directory", "where.*am.*i"],
            literal(platform!(windows: "cd", unix: "pwd")),
        )?,
        CommandPattern::new(
            &["system", "info", "about", "details", "computer"],
            &["system.*info", "about.*computer", "computer.*details"],
            ResolvedCommand::Pseudo(SystemInfo),
        )?,
        CommandPattern::new(
            &["memory", "ram", "free", "available"],
            &["(how much|available|free).*memory", "memory.*usage"],
            ResolvedCommand::Pseudo(MemoryInfo),
        )?,
        CommandPattern::new(
            &["ip", "address", "network"],
            &["(what|my).*ip.*address", "show.*ip"],
            ResolvedCommand::Pseudo(IpAddress),
        )?,
        CommandPattern::new(
            &["weather", "forecast", "temperature", "rain", "sunny"],
            &["(what|how).*weather", "weather.*forecast", "is.*rain"],
            ResolvedCommand::Pseudo(Weather),
        )?,
        CommandPattern::new(
            &["process", "running", "programs", "tasks"],
            &["(show|list).*process", "running.*program", "what.*running"],
            literal(platform!(windows: "tasklist", unix: "ps aux")),
        )?,
        CommandPattern::new(
            &["disk", "space", "storage", "drive"],
            &["(disk|drive|storage).*space", "how much.*space"],
            literal(platform!(
                windows: "wmic logicaldisk get size,freespace,caption",
                unix: "df -h",
            )),
        )?,
        CommandPattern::new(
            &["network", "connection", "internet", "ping", "check"],
            &["(check|test).*connection", "(is|am).*online"],
            literal(platform!(windows: "ping -n 3 8.8.8.8", unix: "ping -c 3 8.8.8.8")),
        )?,
    ])
}
