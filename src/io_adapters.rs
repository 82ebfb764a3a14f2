use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{Result as IoResult, Write};
use std::rc::Rc;

/// Source of input lines for the assistant.
///
/// `None` means there is nothing more to read (end of input, Ctrl-C, or a
/// terminal error) and the caller should wind down.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Option<String>;
}

/// Interactive line editor with history.
pub struct EditorInput {
    editor: DefaultEditor,
}

impl EditorInput {
    pub fn new() -> rustyline::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for EditorInput {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        tracing::debug!(error = %e, "failed to add history entry");
                    }
                }
                Some(line)
            }
            Err(ReadlineError::Interrupted) => {
                tracing::debug!("input interrupted");
                None
            }
            Err(ReadlineError::Eof) => {
                tracing::debug!("end of input");
                None
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to read input");
                None
            }
        }
    }
}

/// Pre-recorded input, for driving the assistant without a terminal.
///
/// Prompts passed to [`LineSource::read_line`] are kept so they can be
/// inspected afterwards.
#[derive(Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.prompts.push(prompt.to_string());
        self.lines.pop_front()
    }
}

/// Memory-backed writer for capturing console output or the interaction log.
#[derive(Clone, Default)]
pub struct MemWriter {
    buf: Rc<RefCell<Vec<u8>>>,
}

impl MemWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create writer and return (writer, handle to the collected bytes).
    pub fn with_handle() -> (Self, Rc<RefCell<Vec<u8>>>) {
        let mw = MemWriter::new();
        let rc = mw.buf.clone();
        (mw, rc)
    }

    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.borrow()).into_owned()
    }
}

impl Write for MemWriter {
    fn write(&mut self, data: &[u8]) -> IoResult<usize> {
        self.buf.borrow_mut().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> IoResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_input_yields_lines_then_none() {
        let mut input = ScriptedInput::new(["one", "two"]);
        assert_eq!(input.read_line("> ").as_deref(), Some("one"));
        assert_eq!(input.read_line("? ").as_deref(), Some("two"));
        assert_eq!(input.read_line("> "), None);
        assert_eq!(input.prompts(), ["> ", "? ", "> "]);
    }

    #[test]
    fn mem_writer_clones_share_buffer() {
        let writer = MemWriter::new();
        let mut other = writer.clone();
        write!(other, "shared").unwrap();
        assert_eq!(writer.contents(), "shared");
    }
}
