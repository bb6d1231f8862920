//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`, so stdout stays clean for the
//! fragments printed by `split` and `migrate --dry-run`.
//!
//! Level precedence: `--log-level`, then `-v` (debug), then `-q` (error), then
//! `CFGMIGRATE_LOG_LEVEL`, then `warn`. When `RUST_LOG` is set it wins.

use std::env;
use std::io::IsTerminal;
use std::sync::Once;

use tracing::Level;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;

/// Environment variable holding the default log level
pub const LOG_LEVEL_ENV: &str = "CFGMIGRATE_LOG_LEVEL";

static INIT: Once = Once::new();

/// Install the global subscriber according to the CLI flags
pub fn init_from_args(cli: &Cli) {
    let level = select_level(
        cli.log_level.as_deref(),
        cli.verbose,
        cli.quiet,
        env::var(LOG_LEVEL_ENV).ok().as_deref(),
    );

    INIT.call_once(|| {
        let mut filter = EnvFilter::from_default_env();

        if env::var("RUST_LOG").is_err() {
            if let Ok(directive) = format!("cfgmigrate={level}").parse::<Directive>() {
                filter = filter.add_directive(directive);
            }
        }

        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .without_time()
                    .with_ansi(std::io::stderr().is_terminal())
                    .with_writer(std::io::stderr),
            )
            .init();
    });
}

fn select_level(
    explicit: Option<&str>,
    verbose: bool,
    quiet: bool,
    env_level: Option<&str>,
) -> Level {
    if let Some(level) = explicit {
        parse_level(level)
    } else if verbose {
        Level::DEBUG
    } else if quiet {
        Level::ERROR
    } else if let Some(level) = env_level {
        parse_level(level)
    } else {
        Level::WARN
    }
}

fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{level_str}', defaulting to WARN. Valid levels: trace, debug, info, warn, error"
            );
            Level::WARN
        }
    }
}
