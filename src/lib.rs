//! Startup configuration and logging for the cats application.
//!
//! Two pieces, each run once at process startup: [`config`] resolves
//! and decodes the YAML configuration file, and [`logging`] installs
//! the process-wide tracing subscriber for the declared environment.

pub mod config;
pub mod logging;
