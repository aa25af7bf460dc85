//! Diagnostic logging and the Q&A transcript.
//!
//! The terminal belongs to the UI, so `tracing` output is written to a log
//! file instead of stderr. Separately, when enabled, every answered question
//! is appended to a daily transcript file named `qa_<date>.log` in the
//! configured transcript directory (default: `~/.local/share/ragdesk/transcripts/`).

use crate::app::state::TranscriptEntry;
use crate::config::{expand_home, LoggingConfig};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber writing to `config.log_file`.
///
/// `RUST_LOG` takes precedence over `config.level`. Returns `false` if the
/// log file could not be opened, in which case nothing is installed.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let path = expand_home(&config.log_file);
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return false;
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok()
}

/// Appends answered questions to daily transcript files.
///
/// Only the current day's file handle is kept open; it is swapped when the
/// date changes. Write failures are ignored, the transcript is best effort.
pub struct TranscriptLogger {
    enabled: bool,
    dir: PathBuf,
    current: Option<(String, File)>,
}

impl TranscriptLogger {
    pub fn new(config: &LoggingConfig) -> Self {
        Self {
            enabled: config.transcript,
            dir: expand_home(&config.transcript_dir),
            current: None,
        }
    }

    /// Write one entry. No-op if the transcript is disabled.
    pub fn log_entry(&mut self, entry: &TranscriptEntry) {
        if !self.enabled {
            return;
        }
        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        let Some(handle) = self.handle_for(&date) else {
            return;
        };

        let _ = writeln!(handle, "[{}] Q: {}", entry.timestamp, one_record(&entry.question));
        let _ = writeln!(handle, "[{}] A: {}", entry.timestamp, one_record(&entry.answer));
        let _ = writeln!(handle, "[{}] {}", entry.timestamp, one_record(&entry.sources));
    }

    fn handle_for(&mut self, date: &str) -> Option<&mut File> {
        if self.current.as_ref().map(|(d, _)| d.as_str()) != Some(date) {
            // drops the previous day's handle
            self.current = None;
            let _ = fs::create_dir_all(&self.dir);
            let path = self.dir.join(format!("qa_{}.log", date));
            match OpenOptions::new().create(true).append(true).open(&path) {
                Ok(file) => self.current = Some((date.to_string(), file)),
                Err(err) => {
                    tracing::warn!(error = %err, path = %path.display(), "cannot open transcript file");
                    return None;
                }
            }
        }
        self.current.as_mut().map(|(_, file)| file)
    }
}

/// Keep a multi-line value on its record: continuation lines are indented.
fn one_record(text: &str) -> String {
    text.lines().collect::<Vec<_>>().join("\n    ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> TranscriptEntry {
        TranscriptEntry {
            timestamp: "12:00:00".into(),
            question: "capital?".into(),
            answer: "Paris".into(),
            sources: "Sources: page 3 (text)".into(),
        }
    }

    fn config(dir: &std::path::Path, enabled: bool) -> LoggingConfig {
        LoggingConfig {
            transcript: enabled,
            transcript_dir: dir.display().to_string(),
            ..LoggingConfig::default()
        }
    }

    #[test]
    fn test_transcript_appends_entries() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger = TranscriptLogger::new(&config(dir.path(), true));
        logger.log_entry(&entry());
        logger.log_entry(&entry());
        drop(logger);

        let files: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(files.len(), 1);
        let contents = fs::read_to_string(files[0].as_ref().unwrap().path()).unwrap();
        assert_eq!(contents.lines().count(), 6);
        assert!(contents.starts_with(
            "[12:00:00] Q: capital?\n[12:00:00] A: Paris\n[12:00:00] Sources: page 3 (text)\n"
        ));
    }

    #[test]
    fn test_multiline_answer_stays_in_its_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger = TranscriptLogger::new(&config(dir.path(), true));
        logger.log_entry(&TranscriptEntry {
            answer: "Growth slowed.\r\nInflation eased.".into(),
            ..entry()
        });
        drop(logger);

        let file = fs::read_dir(dir.path()).unwrap().next().unwrap().unwrap().path();
        let contents = fs::read_to_string(file).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines[1], "[12:00:00] A: Growth slowed.");
        assert_eq!(lines[2], "    Inflation eased.");
        assert!(lines.iter().filter(|l| l.starts_with('[')).count() == 3);
    }

    #[test]
    fn test_handle_is_swapped_per_day() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger = TranscriptLogger::new(&config(dir.path(), true));
        assert!(logger.handle_for("2026-10-18").is_some());
        assert!(logger.handle_for("2026-10-19").is_some());
        assert_eq!(logger.current.as_ref().map(|(d, _)| d.as_str()), Some("2026-10-19"));

        let mut names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        assert_eq!(names, vec!["qa_2026-10-18.log", "qa_2026-10-19.log"]);
    }

    #[test]
    fn test_disabled_transcript_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger = TranscriptLogger::new(&config(dir.path(), false));
        logger.log_entry(&entry());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
