//! Config - Application Configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Window configuration
    pub window: WindowConfig,
    /// Contact feed configuration
    pub feed: FeedConfig,
    /// Logging configuration
    pub log: LogConfig,
}

/// Main window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial width in pixels
    pub width: f32,
    /// Initial height in pixels
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Contacts".to_string(),
            width: 900.0,
            height: 600.0,
        }
    }
}

/// Where incoming contacts are read from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FeedConfig {
    /// JSON-lines file of contacts
    pub path: Option<PathBuf>,
    /// Read JSON-lines contacts from stdin (ignored when `path` is set)
    pub stdin: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    pub level: String,
    /// Also write a daily rolling log file in the data directory
    pub file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: false,
        }
    }
}
