//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the question-answering backend lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Origin the `/api/...` paths are resolved against.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    /// Entries kept in the question and upload-path histories.
    #[serde(default = "default_max_history")]
    pub max_history: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            max_history: default_max_history(),
        }
    }
}

/// Diagnostic log and Q&A transcript settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default)]
    pub transcript: bool,
    #[serde(default = "default_transcript_dir")]
    pub transcript_dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            log_file: default_log_file(),
            transcript: false,
            transcript_dir: default_transcript_dir(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timestamp_format() -> String {
    "%H:%M:%S".to_string()
}

fn default_max_history() -> usize {
    100
}

fn default_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "~/.local/share/ragdesk/ragdesk.log".to_string()
}

fn default_transcript_dir() -> String {
    "~/.local/share/ragdesk/transcripts".to_string()
}
