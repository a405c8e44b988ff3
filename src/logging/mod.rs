//! Logging setup keyed by deployment environment.
//!
//! `local` logs to the console at debug level, `dev` to the console and
//! `logs/cats.dev.log` at info level, `prod` to `logs/cats.prod.log`
//! only. File output is JSON, one record per line. This mutates
//! process-wide tracing state: call [`init`] at most once per process.

use crate::config::{Environment, InvalidEnvironment};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const DEV_LOG_FILE: &str = "logs/cats.dev.log";
const PROD_LOG_FILE: &str = "logs/cats.prod.log";

/// Logging initialization error.
#[derive(Debug, Error)]
pub enum LogError {
    /// Environment tag outside local/dev/prod.
    #[error(transparent)]
    InvalidEnvironment(#[from] InvalidEnvironment),
    /// A log file destination could not be opened.
    #[error("log: failed to open {path}: {source}")]
    OpenLogFile {
        path: String,
        #[source]
        source: io::Error,
    },
    /// A global subscriber is already installed.
    #[error("log: logging already initialized")]
    AlreadyInitialized,
}

/// Handle returned by [`init`].
///
/// Keeps the non-blocking file writer alive; dropping it flushes
/// buffered records and stops the background writer thread.
#[derive(Debug)]
pub struct LogGuard {
    name: String,
    _file_guard: Option<WorkerGuard>,
}

impl LogGuard {
    /// Display name of the configured logger, e.g. `cats | local`.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Destinations, level and display name for one environment.
///
/// Pure selection, split out from [`init`] so the per-environment table
/// is testable without installing a global subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LogSetup {
    pub(crate) name: String,
    pub(crate) level: LevelFilter,
    pub(crate) console: bool,
    pub(crate) file: Option<&'static str>,
}

pub(crate) fn setup_for(env: Environment) -> LogSetup {
    match env {
        Environment::Local => LogSetup {
            name: format!("cats | {env}"),
            level: LevelFilter::DEBUG,
            console: true,
            file: None,
        },
        Environment::Dev => LogSetup {
            name: format!("cats - {env}"),
            level: LevelFilter::INFO,
            console: true,
            file: Some(DEV_LOG_FILE),
        },
        Environment::Prod => LogSetup {
            name: format!("cats - {env}"),
            level: LevelFilter::INFO,
            console: false,
            file: Some(PROD_LOG_FILE),
        },
    }
}

/// Install the process-wide logging configuration for `env`.
///
/// Must be called at most once per process; a second call fails with
/// [`LogError::AlreadyInitialized`] instead of stacking duplicate
/// output destinations. The returned [`LogGuard`] must be held for as
/// long as file logging should keep flushing.
///
/// `RUST_LOG` overrides the per-environment level when set.
pub fn init(env: Environment) -> Result<LogGuard, LogError> {
    let setup = setup_for(env);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(setup.level.to_string()));

    let console_layer = setup.console.then(|| {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
    });

    let mut file_guard = None;
    let file_layer = match setup.file {
        Some(path) => {
            let file = open_log_file(Path::new(path))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            file_guard = Some(guard);
            Some(fmt::layer().json().with_writer(writer).with_ansi(false))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|_| LogError::AlreadyInitialized)?;

    Ok(LogGuard {
        name: setup.name,
        _file_guard: file_guard,
    })
}

/// Parse `tag` and install logging for it.
///
/// Standalone entry point that validates the tag independently of
/// config decoding; anything outside local/dev/prod fails with
/// [`LogError::InvalidEnvironment`].
pub fn init_from_tag(tag: &str) -> Result<LogGuard, LogError> {
    let env = Environment::from_str(tag)?;
    init(env)
}

/// Open a log destination in create+append mode, creating the parent
/// directory first.
fn open_log_file(path: &Path) -> Result<File, LogError> {
    let open_err = |source: io::Error| LogError::OpenLogFile {
        path: path.display().to_string(),
        source,
    };

    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).map_err(open_err)?;
        }
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(open_err)
}
