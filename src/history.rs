use chrono::{DateTime, Local};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const SESSION_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Append-only transcript of user inputs and assistant replies.
///
/// The program never reads this back. When the file cannot be opened the log
/// is disabled and every call becomes a no-op.
pub struct InteractionLog {
    sink: Option<Box<dyn Write>>,
}

impl InteractionLog {
    /// Open (or create) the log file in append mode and write a session
    /// header.
    pub fn open(path: &Path) -> Self {
        let opened = path
            .parent()
            .map_or(Ok(()), fs::create_dir_all)
            .and_then(|_| OpenOptions::new().create(true).append(true).open(path));
        match opened {
            Ok(file) => Self::to_writer(Box::new(file)),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "could not open log file, logging disabled"
                );
                Self::disabled()
            }
        }
    }

    /// Log into an arbitrary writer, starting a session immediately.
    pub fn to_writer(writer: Box<dyn Write>) -> Self {
        let mut log = Self { sink: Some(writer) };
        let now = Local::now();
        log.write_line(format_args!(
            "\n--- TermBot Session Started: {}",
            now.format(SESSION_FORMAT)
        ));
        log
    }

    pub fn disabled() -> Self {
        Self { sink: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Append the two transcript lines for one exchange.
    pub fn record(&mut self, input: &str, response: &str) {
        self.record_at(Local::now(), input, response);
    }

    fn record_at(&mut self, when: DateTime<Local>, input: &str, response: &str) {
        let ts = when.format(TIMESTAMP_FORMAT);
        self.write_line(format_args!("[{}] User: {}", ts, input));
        self.write_line(format_args!("[{}] Bot: {}", ts, response));
    }

    fn write_line(&mut self, line: std::fmt::Arguments<'_>) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        let result = writeln!(sink, "{}", line).and_then(|_| sink.flush());
        if let Err(e) = result {
            tracing::warn!(error = %e, "failed to write interaction log, logging disabled");
            self.sink = None;
        }
    }
}

impl Drop for InteractionLog {
    fn drop(&mut self) {
        if self.sink.is_some() {
            let now = Local::now();
            self.write_line(format_args!(
                "--- TermBot Session Ended: {}",
                now.format(SESSION_FORMAT)
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io_adapters::MemWriter;
    use chrono::TimeZone;

    fn lines(buf: &[u8]) -> Vec<String> {
        String::from_utf8(buf.to_vec())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn record_writes_two_timestamped_lines() {
        let (writer, buf) = MemWriter::with_handle();
        let mut log = InteractionLog::to_writer(Box::new(writer));
        let when = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        log.record_at(when, "what time is it", "12:00:00");

        let written = lines(&buf.borrow());
        assert!(written[1].starts_with("--- TermBot Session Started: "));
        assert_eq!(written[2], "[2024-03-09 07:05:01] User: what time is it");
        assert_eq!(written[3], "[2024-03-09 07:05:01] Bot: 12:00:00");
    }

    #[test]
    fn drop_writes_session_footer() {
        let (writer, buf) = MemWriter::with_handle();
        let log = InteractionLog::to_writer(Box::new(writer));
        drop(log);
        let written = lines(&buf.borrow());
        assert!(written.last().unwrap().starts_with("--- TermBot Session Ended: "));
    }

    #[test]
    fn open_creates_directory_and_appends() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("logs").join("termbot_log.txt");
        {
            let mut log = InteractionLog::open(&path);
            assert!(log.is_enabled());
            log.record("hi", "hello");
        }
        {
            let mut log = InteractionLog::open(&path);
            log.record("again", "sure");
        }
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.matches("Session Started").count(), 2);
        assert!(contents.contains("] User: hi\n"));
        assert!(contents.contains("] Bot: sure\n"));
    }

    #[test]
    fn unopenable_path_disables_logging() {
        let dir = tempfile::TempDir::new().unwrap();
        // a directory where the file should be
        let mut log = InteractionLog::open(dir.path());
        assert!(!log.is_enabled());
        log.record("ignored", "ignored");
    }
}
