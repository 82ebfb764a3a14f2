use crate::io_adapters::LineSource;
use crate::ui::Console;
use std::collections::BTreeMap;

pub const ALIAS_PREFIX: &str = "alias ";

/// Directives the assistant handles itself instead of interpreting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaCommand<'a> {
    Help,
    Menu,
    Clear,
    Exit,
    /// Text after the `alias ` prefix, still unparsed.
    Alias(&'a str),
}

impl<'a> MetaCommand<'a> {
    /// Recognize a directive. Keywords are exact and case-sensitive.
    pub fn parse(input: &'a str) -> Option<Self> {
        match input {
            "help" => Some(MetaCommand::Help),
            "menu" => Some(MetaCommand::Menu),
            "clear" => Some(MetaCommand::Clear),
            "exit" | "quit" => Some(MetaCommand::Exit),
            _ => input.strip_prefix(ALIAS_PREFIX).map(MetaCommand::Alias),
        }
    }
}

const HELP: &[&str] = &[
    "",
    "📚 TermBot Help Menu",
    "===================",
    "• Natural language commands:",
    "  - \"What time is it?\"",
    "  - \"List files in this folder\"",
    "  - \"Show available memory\"",
    "  - \"What's my IP address?\"",
    "  - \"Check the weather\"",
    "",
    "• Aliases:",
    "  - Create: alias name=command",
    "  - Example: alias weather=curl wttr.in/?format=3",
    "",
    "• System Commands:",
    "  - help   : Show this menu",
    "  - menu   : Show interactive menu",
    "  - clear  : Clear the screen",
    "  - exit   : Exit TermBot",
    "===================",
];

pub fn show_help(console: &mut Console) {
    for line in HELP {
        console.line(line);
    }
}

struct Section {
    title: &'static str,
    entries: &'static [&'static str],
}

const SECTIONS: &[Section] = &[
    Section {
        title: "📁 Files and Directories",
        entries: &[
            "• \"Show files\" - List files",
            "• \"Current directory\" - Show working directory",
        ],
    },
    Section {
        title: "💻 System Information",
        entries: &[
            "• \"How much memory\" - Show memory usage",
            "• \"System info\" - Show system details",
        ],
    },
    Section {
        title: "🌐 Network Tools",
        entries: &[
            "• \"What's my IP\" - Show IP address",
            "• \"Check connection\" - Ping Google",
            "• \"Show weather\" - Display weather",
        ],
    },
    Section {
        title: "🕒 Date and Time",
        entries: &[
            "• \"What time is it\" - Show time",
            "• \"What's today's date\" - Show date",
            "• \"Show calendar\" - Display calendar",
        ],
    },
];

const ALIASES_CHOICE: &str = "5";
const EXIT_CHOICE: &str = "6";

/// Interactive menu loop. Returns when the user picks "Exit Menu" or input
/// runs out.
pub fn show_menu(
    console: &mut Console,
    input: &mut dyn LineSource,
    aliases: &BTreeMap<String, String>,
) {
    loop {
        console.clear();
        console.banner();
        console.line("");
        console.line("🔍 TermBot Interactive Menu");
        console.line("=========================");
        for (i, section) in SECTIONS.iter().enumerate() {
            console.line(&format!("{}. {}", i + 1, strip_icon(section.title)));
        }
        console.line("5. Your Aliases");
        console.line("6. Exit Menu");
        console.line("=========================");

        let Some(choice) = input.read_line("Enter your choice (1-6): ") else {
            return;
        };
        let choice = choice.trim();

        if choice == EXIT_CHOICE {
            console.line("Returning to main interface...");
            return;
        }
        if choice == ALIASES_CHOICE {
            show_section_title(console, "🔖 Your Aliases");
            if aliases.is_empty() {
                console.line("No aliases defined. Use 'alias name=command'");
            }
            for (name, command) in aliases {
                console.line(&format!("• \"{}\" → \"{}\"", name, command));
            }
        } else {
            let section = choice
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| SECTIONS.get(i));
            match section {
                Some(section) => {
                    show_section_title(console, section.title);
                    for entry in section.entries {
                        console.line(entry);
                    }
                }
                None => console.line("Invalid choice. Try again."),
            }
        }

        if input.read_line("\nPress Enter to continue...").is_none() {
            return;
        }
    }
}

fn show_section_title(console: &mut Console, title: &str) {
    console.line("");
    console.line(title);
    console.line("----------------------");
}

/// Menu entries are listed without the section icon.
fn strip_icon(title: &str) -> &str {
    title.split_once(' ').map_or(title, |(_, rest)| rest)
}
