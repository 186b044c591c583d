//! # Logger
//!
//! Process-wide `tracing` setup for the workspace binaries.
//!
//! Diagnostics go to **stderr**, leaving stdout to the binary's own output. Giving
//! the builder a directory adds a rolling file sink fed by a background writer;
//! the returned [`Logger`] owns that writer and has to outlive all logging, or
//! buffered lines are lost.
//!
//! The level set on the builder is the default directive. Extra directives such
//! as `ida_assurance=trace` come from [`LoggerBuilder::directives`] or, when none
//! are given, from `RUST_LOG`.
//!
//! ```rust
//! use ida_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder("ida-inspect").level(LevelFilter::WARN).init().unwrap();
//! tracing::warn!("shown on stderr");
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

type SinkLayer = Box<dyn Layer<Registry> + Send + Sync>;

const FILE_SUFFIX: &str = "log";
const DEFAULT_MAX_FILES: usize = 7;

/// Builder state: stderr is the only sink.
#[derive(Debug)]
pub struct StderrOnly;

/// Builder state: stderr plus rolling files in a directory.
#[derive(Debug)]
pub struct RollingFiles {
    directory: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

#[derive(Debug)]
struct Settings {
    name: String,
    level: LevelFilter,
    directives: Option<String>,
    stderr: bool,
}

/// Configures and installs the global subscriber.
///
/// File options only exist once [`files`](LoggerBuilder::files) has been called.
#[derive(Debug)]
pub struct LoggerBuilder<S = StderrOnly> {
    settings: Settings,
    sink: S,
}

impl<S> LoggerBuilder<S> {
    /// Default level for every target without its own directive.
    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Comma-separated `EnvFilter` directives, e.g. `ida_assurance=trace`.
    ///
    /// Replaces `RUST_LOG`. A malformed string makes `init` fail.
    #[must_use]
    pub fn directives(mut self, directives: impl Into<String>) -> Self {
        self.settings.directives = Some(directives.into());
        self
    }

    /// Turns the stderr sink on or off (on by default).
    #[must_use]
    pub const fn stderr(mut self, enabled: bool) -> Self {
        self.settings.stderr = enabled;
        self
    }
}

impl LoggerBuilder<StderrOnly> {
    /// Also writes to rolling files in `directory`, named `<name>.<period>.log`.
    pub fn files(self, directory: impl Into<PathBuf>) -> LoggerBuilder<RollingFiles> {
        LoggerBuilder {
            settings: self.settings,
            sink: RollingFiles {
                directory: directory.into(),
                rotation: Rotation::DAILY,
                max_files: DEFAULT_MAX_FILES,
                json: false,
            },
        }
    }

    /// Installs the subscriber.
    ///
    /// # Errors
    /// [`LoggerError::InvalidConfiguration`] if stderr is disabled (nothing would be
    /// written) or the directives are malformed, [`LoggerError::Subscriber`] if a
    /// global subscriber already exists.
    pub fn init(self) -> Result<Logger, LoggerError> {
        if !self.settings.stderr {
            return Err(LoggerError::InvalidConfiguration {
                message: "stderr is disabled and no log directory is set".into(),
                context: None,
            });
        }
        self.settings.install(None)?;
        Ok(Logger { file_writer: None })
    }
}

impl LoggerBuilder<RollingFiles> {
    #[must_use]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.sink.rotation = rotation;
        self
    }

    /// Number of rolled files to keep; the oldest are pruned.
    #[must_use]
    pub const fn max_files(mut self, max_files: usize) -> Self {
        self.sink.max_files = max_files;
        self
    }

    /// Writes one JSON object per line instead of plain text.
    #[must_use]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.sink.json = enabled;
        self
    }

    /// Opens the log directory and installs the subscriber.
    ///
    /// # Errors
    /// [`LoggerError::InvalidConfiguration`] for an empty name, `max_files == 0` or
    /// malformed directives, [`LoggerError::Internal`] / [`LoggerError::Appender`]
    /// if the directory cannot be used, [`LoggerError::Subscriber`] if a global
    /// subscriber already exists.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let (layer, guard) = self.sink.open(&self.settings.name)?;
        self.settings.install(Some(layer))?;
        Ok(Logger { file_writer: Some(guard) })
    }
}

impl RollingFiles {
    fn open(self, name: &str) -> Result<(SinkLayer, WorkerGuard), LoggerError> {
        if name.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "a log file name is required".into(),
                context: None,
            });
        }
        if self.max_files == 0 {
            return Err(LoggerError::InvalidConfiguration {
                message: "max_files must be at least 1".into(),
                context: None,
            });
        }

        std::fs::create_dir_all(&self.directory).map_err(|e| LoggerError::Internal {
            message: e.to_string().into(),
            context: Some(format!("Failed to create {}", self.directory.display()).into()),
        })?;

        let appender = RollingFileAppender::builder()
            .rotation(self.rotation)
            .filename_prefix(name)
            .filename_suffix(FILE_SUFFIX)
            .max_log_files(self.max_files)
            .build(&self.directory)
            .context("Failed to open the rolling log file")?;

        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer().with_writer(writer).with_ansi(false);
        let layer: SinkLayer = if self.json { layer.json().boxed() } else { layer.boxed() };

        Ok((layer, guard))
    }
}

impl Settings {
    fn filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        match &self.directives {
            None => Ok(builder.from_env_lossy()),
            Some(directives) => {
                builder.parse(directives).map_err(|e| LoggerError::InvalidConfiguration {
                    message: format!("Invalid log directives '{directives}': {e}").into(),
                    context: None,
                })
            },
        }
    }

    fn install(&self, file: Option<SinkLayer>) -> Result<(), LoggerError> {
        let filter = self.filter()?;

        let mut sinks: Vec<SinkLayer> = Vec::with_capacity(2);
        if self.stderr {
            let ansi = std::io::stderr().is_terminal();
            sinks.push(fmt::layer().compact().with_writer(std::io::stderr).with_ansi(ansi).boxed());
        }
        sinks.extend(file);

        tracing_subscriber::registry()
            .with(sinks)
            .with(filter)
            .try_init()
            .context("A global subscriber is already installed")?;

        Ok(())
    }
}

/// Handle of the installed subscriber.
///
/// Owns the background file writer, if any. Dropping it flushes and closes the
/// log file; stderr logging keeps working.
#[must_use = "dropping the logger closes the log file"]
#[derive(Debug)]
pub struct Logger {
    file_writer: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a builder. `name` prefixes the rolled log files.
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            settings: Settings {
                name: name.into(),
                level: LevelFilter::INFO,
                directives: None,
                stderr: true,
            },
            sink: StderrOnly,
        }
    }

    /// `true` if lines are also written to a log directory.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.file_writer.is_some()
    }
}

/// Parses a level name (`off`, `error`, `warn`, `info`, `debug`, `trace`), case-insensitive.
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for unknown names.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    LevelFilter::from_str(level.trim()).map_err(|e| LoggerError::InvalidConfiguration {
        message: format!("Invalid log level '{level}': {e}").into(),
        context: None,
    })
}
