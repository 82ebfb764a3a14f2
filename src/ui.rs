//! Terminal presentation: colors, banner, and the small animations.

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

const BANNER: &str = r"
   _______                    ____        _
  |__   __|                  |  _ \      | |
     | | ___ _ __ _ __ ___   | |_) | ___ | |_
     | |/ _ \ '__| '_ ` _ \  |  _ < / _ \| __|
     | |  __/ |  | | | | | | | |_) | (_) | |_
     |_|\___|_|  |_| |_| |_| |____/ \___/ \__|
";

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME: Duration = Duration::from_millis(100);
const TYPING_DELAY: Duration = Duration::from_millis(30);

/// Where the assistant writes everything the user sees.
///
/// With effects off the output is plain text: no colors, no cursor movement
/// and no delays.
pub struct Console {
    out: Box<dyn Write>,
    effects: bool,
}

impl Console {
    pub fn new(out: Box<dyn Write>, effects: bool) -> Self {
        Self { out, effects }
    }

    pub fn stdout(effects: bool) -> Self {
        Self::new(Box::new(io::stdout()), effects)
    }

    pub fn line(&mut self, text: &str) {
        self.emit(|out| writeln!(out, "{}", text));
    }

    pub fn colored(&mut self, text: &str, color: Color) {
        if !self.effects {
            return self.line(text);
        }
        self.emit(|out| {
            queue!(out, SetForegroundColor(color), Print(text), ResetColor, Print("\n"))
        });
    }

    pub fn success(&mut self, text: &str) {
        self.colored(text, Color::Green);
    }

    pub fn error(&mut self, text: &str) {
        self.colored(text, Color::Red);
    }

    pub fn notice(&mut self, text: &str) {
        self.colored(text, Color::Yellow);
    }

    pub fn banner(&mut self) {
        if self.effects {
            self.emit(|out| {
                queue!(
                    out,
                    SetForegroundColor(Color::Cyan),
                    SetAttribute(Attribute::Bold),
                    Print(BANNER),
                    SetAttribute(Attribute::Reset),
                    ResetColor,
                    Print("\n")
                )
            });
        } else {
            self.line(BANNER);
        }
        self.notice("      Your Personal Terminal Assistant");
        self.line("");
    }

    /// Spinner shown while a command is about to run.
    pub fn loading(&mut self, duration: Duration) {
        if !self.effects {
            return;
        }
        let frames = (duration.as_millis() / FRAME.as_millis()) as usize;
        for i in 0..frames {
            let frame = SPINNER[i % SPINNER.len()];
            self.emit(|out| {
                queue!(
                    out,
                    Print("\rLoading "),
                    SetForegroundColor(Color::Cyan),
                    Print(frame),
                    ResetColor
                )?;
                out.flush()
            });
            thread::sleep(FRAME);
        }
        self.emit(|out| {
            queue!(
                out,
                Print("\rLoading "),
                SetForegroundColor(Color::Green),
                Print("✓"),
                ResetColor,
                Print("\n")
            )
        });
    }

    /// Print `text` one character at a time.
    pub fn typed(&mut self, text: &str) {
        if !self.effects {
            return self.line(text);
        }
        for c in text.chars() {
            self.emit(|out| {
                write!(out, "{}", c)?;
                out.flush()
            });
            thread::sleep(TYPING_DELAY);
        }
        self.line("");
    }

    pub fn clear(&mut self) {
        if self.effects {
            self.emit(|out| queue!(out, Clear(ClearType::All), MoveTo(0, 0)));
        }
    }

    fn emit(&mut self, f: impl FnOnce(&mut Box<dyn Write>) -> io::Result<()>) {
        let result = f(&mut self.out).and_then(|_| self.out.flush());
        if let Err(e) = result {
            tracing::debug!(error = %e, "console write failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io_adapters::MemWriter;

    #[test]
    fn plain_console_has_no_escape_codes() {
        let writer = MemWriter::new();
        let mut console = Console::new(Box::new(writer.clone()), false);
        console.success("done");
        console.typed("typed text");
        console.loading(Duration::from_millis(500));
        console.clear();
        assert_eq!(writer.contents(), "done\ntyped text\n");
    }

    #[test]
    fn colored_console_wraps_text_in_escapes() {
        let writer = MemWriter::new();
        let mut console = Console::new(Box::new(writer.clone()), true);
        console.error("bad");
        let out = writer.contents();
        assert!(out.contains("bad"));
        assert!(out.contains('\u{1b}'));
    }
}
