use crate::keys::VERIFIED_CLAIMS;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration of the request inspector.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InspectConfigInner {
    pub log: LogConfig,
    pub output: OutputConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct InspectConfig {
    #[serde(flatten, default)]
    inner: Arc<InspectConfigInner>,
}

impl Deref for InspectConfig {
    type Target = InspectConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for InspectConfig {
    fn deref_mut(&mut self) -> &mut InspectConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Logging knobs handed to the logger builder.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default level directive (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Optional module-directed filter, e.g. `ida_assurance=trace`.
    pub filter: Option<String>,
    /// When set, logs are also written to rolling files in this directory.
    pub directory: Option<PathBuf>,
    /// Write file logs as JSON lines.
    pub json: bool,
    /// How often the log file in `directory` is rolled over.
    pub rotation: LogRotation,
    /// Rolled files kept in `directory`; older ones are removed.
    pub max_files: usize,
}

/// Rollover period of the file log.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Minutely,
    Hourly,
    #[default]
    Daily,
    Never,
}

/// What to extract and how to print it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Top-level member holding the verified claims request.
    pub key: String,
    pub pretty: bool,
}

// --- Default ---

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            filter: None,
            directory: None,
            json: false,
            rotation: LogRotation::Daily,
            max_files: 7,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { key: VERIFIED_CLAIMS.to_owned(), pretty: true }
    }
}
