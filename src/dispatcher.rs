use crate::alias::{self, AliasError, AliasStore};
use crate::command::{ProcessExecutor, ResolvedCommand};
use crate::config::Config;
use crate::easter_egg;
use crate::history::InteractionLog;
use crate::intent::IntentMatcher;
use crate::io_adapters::LineSource;
use crate::meta::{self, MetaCommand};
use crate::runner::CommandRunner;
use crate::suggest::{self, KNOWN_COMMANDS};
use crate::ui::Console;
use anyhow::Context;
use std::time::Duration;

pub const PROMPT: &str = "> ";
pub const GREETING: &str =
    "Hello! I'm TermBot, your terminal assistant. Type 'help' to get started.";
pub const FAREWELL: &str = "Goodbye! Thanks for using TermBot.";
pub const NOT_UNDERSTOOD: &str =
    "😕 I'm not sure how to help with that. Type 'help' to see available commands.";
pub const INVALID_ALIAS: &str = "❌ Invalid alias format. Use: alias name=command";

const STARTUP_DELAY: Duration = Duration::from_millis(1000);
const COMMAND_DELAY: Duration = Duration::from_millis(500);

/// What the REPL should do after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

enum Step {
    Done(Flow),
    /// The user accepted a suggestion; handle it as a fresh line.
    Reprocess(String),
}

/// The assistant: turns one line of input at a time into a response.
///
/// Each line goes through meta commands, easter eggs, alias definition,
/// alias lookup, intent matching and finally suggestions, stopping at the
/// first stage that handles it.
///
/// Example
/// ```no_run
/// use termbot::{Assistant, Config, SystemShell, Console};
/// use termbot::io_adapters::EditorInput;
///
/// let config = Config::from_args(argh::from_env());
/// let console = Console::stdout(config.effects);
/// let mut bot = Assistant::new(&config, SystemShell::new(), console).unwrap();
/// bot.repl(&mut EditorInput::new().unwrap());
/// ```
pub struct Assistant<E> {
    matcher: IntentMatcher,
    runner: CommandRunner<E>,
    aliases: AliasStore,
    log: InteractionLog,
    console: Console,
}

impl<E: ProcessExecutor> Assistant<E> {
    /// Build an assistant with the built-in intent table, loading aliases and
    /// opening the interaction log at the configured locations.
    pub fn new(config: &Config, executor: E, console: Console) -> anyhow::Result<Self> {
        let matcher = IntentMatcher::builtin().context("built-in intent table is invalid")?;
        let alias_file = config.alias_file();
        let aliases = AliasStore::load(&alias_file)
            .with_context(|| format!("can't load aliases from {}", alias_file.display()))?;
        let log = InteractionLog::open(&config.log_file());
        Ok(Self::from_parts(
            matcher,
            CommandRunner::new(executor),
            aliases,
            log,
            console,
        ))
    }

    pub fn from_parts(
        matcher: IntentMatcher,
        runner: CommandRunner<E>,
        aliases: AliasStore,
        log: InteractionLog,
        console: Console,
    ) -> Self {
        Self {
            matcher,
            runner,
            aliases,
            log,
            console,
        }
    }

    pub fn aliases(&self) -> &AliasStore {
        &self.aliases
    }

    /// Clear the screen, show the banner and greet the user.
    pub fn greet(&mut self) {
        self.console.clear();
        self.console.banner();
        self.console.loading(STARTUP_DELAY);
        self.console.success(GREETING);
    }

    /// Read-eval-print loop until `exit`/`quit` or end of input.
    pub fn repl(&mut self, input: &mut dyn LineSource) {
        loop {
            self.console.line("");
            let Some(line) = input.read_line(PROMPT) else {
                self.console.notice(FAREWELL);
                return;
            };
            if self.handle_line(&line, input) == Flow::Exit {
                return;
            }
        }
    }

    /// Handle one line of input. `input` is used for follow-up questions
    /// (suggestion confirmation, the interactive menu).
    ///
    /// An accepted suggestion is handled once more as a new line; it is not
    /// offered further suggestions.
    pub fn handle_line(&mut self, line: &str, input: &mut dyn LineSource) -> Flow {
        let mut current = line.trim().to_string();
        let mut offer_suggestion = true;
        loop {
            match self.step(&current, offer_suggestion, input) {
                Step::Done(flow) => return flow,
                Step::Reprocess(suggestion) => {
                    tracing::debug!(suggestion = %suggestion, "reprocessing accepted suggestion");
                    current = suggestion;
                    offer_suggestion = false;
                }
            }
        }
    }

    fn step(&mut self, line: &str, offer_suggestion: bool, input: &mut dyn LineSource) -> Step {
        if line.is_empty() {
            return Step::Done(Flow::Continue);
        }

        let directive = MetaCommand::parse(line);
        match directive {
            Some(MetaCommand::Help) => {
                meta::show_help(&mut self.console);
                return Step::Done(Flow::Continue);
            }
            Some(MetaCommand::Menu) => {
                meta::show_menu(&mut self.console, input, self.aliases.all());
                return Step::Done(Flow::Continue);
            }
            Some(MetaCommand::Clear) => {
                self.console.clear();
                self.console.banner();
                return Step::Done(Flow::Continue);
            }
            Some(MetaCommand::Exit) => {
                self.console.notice(FAREWELL);
                return Step::Done(Flow::Exit);
            }
            Some(MetaCommand::Alias(_)) | None => {}
        }

        if let Some(reply) = easter_egg::lookup(line) {
            self.console.typed(reply);
            self.log.record(line, reply);
            return Step::Done(Flow::Continue);
        }

        if let Some(MetaCommand::Alias(definition)) = directive {
            self.define_alias(line, definition);
            return Step::Done(Flow::Continue);
        }

        let command = match self.aliases.resolve(line) {
            Some(aliased) => {
                self.console.line(&format!("🔄 Using alias: {}", aliased));
                Some(ResolvedCommand::literal(aliased))
            }
            None => self.matcher.interpret(line),
        };

        if let Some(command) = command {
            tracing::info!(input = line, command = %command, "running command");
            self.console.loading(COMMAND_DELAY);
            let response = self.runner.execute(&command);
            let response = response.trim_end();
            self.console.line(response);
            self.log.record(line, response);
            return Step::Done(Flow::Continue);
        }

        if offer_suggestion {
            let known = KNOWN_COMMANDS.iter().copied();
            let candidate = suggest::suggest(line, known, self.aliases.names());
            if let Some(candidate) = candidate {
                let question = format!("🤔 Did you mean: \"{}\"? (y/n): ", candidate);
                let answer = input.read_line(&question).unwrap_or_default();
                if is_yes(&answer) {
                    return Step::Reprocess(candidate);
                }
            }
        }

        self.console.notice(NOT_UNDERSTOOD);
        self.log.record(line, NOT_UNDERSTOOD);
        Step::Done(Flow::Continue)
    }

    fn define_alias(&mut self, line: &str, definition: &str) {
        let result = alias::parse_directive(definition)
            .and_then(|(name, command)| self.aliases.set(&name, &command));
        match result {
            Ok((name, command)) => {
                let response = format!("✅ Alias created: \"{}\" → \"{}\"", name, command);
                self.console.success(&response);
                self.log.record(line, &response);
            }
            Err(AliasError::Malformed) => self.console.error(INVALID_ALIAS),
            Err(e) => {
                tracing::error!(error = %e, "alias not persisted");
                let response = format!("❌ {}", e);
                self.console.error(&response);
                self.log.record(line, &response);
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
