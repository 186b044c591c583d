//! Command-line inspector for Identity Assurance requests.
//!
//! Reads a request object, extracts its `verified_claims` constraints and renders
//! the resulting tree as JSON. Logs go to stderr, the tree to stdout.

pub mod cli;
pub mod config;

pub use self::cli::Cli;
pub use self::config::{ConfigError, load_config};

use anyhow::{Context, bail};
use ida::domain::config::{InspectConfig, LogConfig, LogRotation};
use ida_logger::{LevelFilter, Logger, Rotation, parse_level};
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

const STDIN_MARKER: &str = "-";

/// Runs one inspection and returns the rendered constraint tree.
///
/// `--key` wins over `output.key`, `--compact` wins over `output.pretty`.
///
/// # Errors
/// Fails if the input cannot be read, is not a JSON object, or its
/// `verified_claims` member does not conform to the schema.
pub fn run(cli: &Cli, cfg: &InspectConfig) -> anyhow::Result<String> {
    let raw = read_input(&cli.input)?;

    let value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse '{}' as JSON", cli.input.display()))?;
    let Value::Object(request) = value else {
        bail!("The request must be a JSON object");
    };

    let key = cli.key.as_deref().unwrap_or(&cfg.output.key);
    debug!(key, members = request.len(), "Inspecting request");

    let container = ida::inspect(&request, key)
        .with_context(|| format!("Request member '{key}' is malformed"))?;

    info!(
        key,
        exists = container.exists(),
        null = container.is_null(),
        elements = container.elements().len(),
        "Constraints extracted"
    );

    let rendered = if cfg.output.pretty && !cli.compact {
        serde_json::to_string_pretty(&container)?
    } else {
        serde_json::to_string(&container)?
    };

    Ok(rendered)
}

/// Installs the global subscriber from the `[log]` section.
///
/// Each `-v` raises the floor (`info`, `debug`, `trace`) above the configured level.
/// With `log.directory` set, lines also go to rolling files there.
///
/// # Errors
/// Fails on an unknown level name, an invalid filter or an unusable log directory.
pub fn init_logger(cfg: &LogConfig, verbose: u8) -> anyhow::Result<Logger> {
    let level = parse_level(&cfg.level)?.max(verbosity(verbose));

    let builder = Logger::builder(env!("CARGO_PKG_NAME")).level(level);
    let builder = match &cfg.filter {
        Some(filter) => builder.directives(filter.as_str()),
        None => builder,
    };

    let logger = match &cfg.directory {
        Some(dir) => builder
            .files(dir)
            .rotation(rotation(cfg.rotation))
            .max_files(cfg.max_files)
            .json(cfg.json)
            .init()?,
        None => builder.init()?,
    };

    debug!(level = %level, files = logger.writes_files(), "Logger installed");
    Ok(logger)
}

fn rotation(period: LogRotation) -> Rotation {
    match period {
        LogRotation::Minutely => Rotation::MINUTELY,
        LogRotation::Hourly => Rotation::HOURLY,
        LogRotation::Daily => Rotation::DAILY,
        LogRotation::Never => Rotation::NEVER,
    }
}

const fn verbosity(count: u8) -> LevelFilter {
    match count {
        0 => LevelFilter::OFF,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == STDIN_MARKER {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).context("Failed to read request from stdin")?;
        return Ok(buf);
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request from '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn cli_for(path: PathBuf) -> Cli {
        Cli { input: path, key: None, config: None, compact: false, verbose: 0 }
    }

    fn request_file(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn verbosity_raises_the_floor() {
        assert_eq!(verbosity(0), LevelFilter::OFF);
        assert_eq!(verbosity(1), LevelFilter::INFO);
        assert_eq!(verbosity(2), LevelFilter::DEBUG);
        assert_eq!(verbosity(9), LevelFilter::TRACE);
        assert_eq!(LevelFilter::WARN.max(verbosity(0)), LevelFilter::WARN);
        assert_eq!(LevelFilter::WARN.max(verbosity(2)), LevelFilter::DEBUG);
    }

    #[test]
    fn rotation_periods_map_onto_the_appender() {
        assert_eq!(rotation(LogRotation::Minutely), Rotation::MINUTELY);
        assert_eq!(rotation(LogRotation::Hourly), Rotation::HOURLY);
        assert_eq!(rotation(LogRotation::Daily), Rotation::DAILY);
        assert_eq!(rotation(LogRotation::Never), Rotation::NEVER);
    }

    #[test]
    fn renders_present_tree() {
        let file = request_file(r#"{"verified_claims":{"claims":{"given_name":null}}}"#);
        let mut cli = cli_for(file.path().to_path_buf());
        cli.compact = true;

        let out = run(&cli, &InspectConfig::default()).unwrap();
        let tree: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(tree["presence"], "present");
        assert_eq!(tree["array"], false);
        assert_eq!(tree["elements"][0]["claims"]["claims"]["given_name"]["presence"], "null");
    }

    #[test]
    fn key_override_selects_member() {
        let file = request_file(r#"{"ext":{"verification":{}},"verified_claims":"junk"}"#);
        let mut cli = cli_for(file.path().to_path_buf());
        cli.key = Some("ext".to_owned());

        let out = run(&cli, &InspectConfig::default()).unwrap();
        assert!(out.contains('\n'), "pretty output by default");
        assert!(out.contains("\"presence\": \"present\""));
    }

    #[test]
    fn non_object_request_is_rejected() {
        let file = request_file("[1, 2, 3]");
        let err = run(&cli_for(file.path().to_path_buf()), &InspectConfig::default()).unwrap_err();
        assert!(err.to_string().contains("must be a JSON object"));
    }

    #[test]
    fn shape_error_is_in_the_chain() {
        let file = request_file(r#"{"verified_claims":{"claims":1}}"#);
        let err = run(&cli_for(file.path().to_path_buf()), &InspectConfig::default()).unwrap_err();

        let chain = format!("{err:#}");
        assert!(chain.contains("Request member 'verified_claims' is malformed"));
        assert!(chain.contains("'claims' is not an object."));
    }
}
