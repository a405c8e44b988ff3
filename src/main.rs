use cats::config::{self, Config};
use cats::logging;
use std::env;
use std::process::ExitCode;
use tracing::info;

/// Extract the `--config` flag value from the command line.
///
/// Accepts both `--config <path>` and `--config=<path>`.
fn parse_config_flag() -> Option<String> {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if let Some(path) = arg.strip_prefix("--config=") {
            return Some(path.to_string());
        }
        if arg == "--config" {
            return args.next();
        }
    }
    None
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let flag = parse_config_flag();
    let env_var = env::var(config::CONFIG_PATH_ENV).ok();
    let path = config::resolve_path(flag.as_deref(), env_var.as_deref())?;

    let cfg = Config::load(&path)?;
    let guard = logging::init(cfg.env)?;

    info!(
        logger = guard.name(),
        config = %path,
        env = %cfg.env,
        storage = %cfg.storage_name,
        http_host = %cfg.http_server.host,
        http_port = cfg.http_server.port,
        "cats initialized"
    );

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
