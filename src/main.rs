mod cli;
mod config;
mod model;
mod storage;
mod timer;

use std::process::ExitCode;

use clap::Parser;
use jiff::Timestamp;
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    // Sampled once so every step of the invocation agrees on the time.
    let now = Timestamp::now().as_second() * 1000;

    match cli::run(&cli, now) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if matches!(e, cli::CliError::InPomodoro) {
                eprintln!("{e}");
            } else {
                eprintln!("error: {e}");
            }
            ExitCode::from(e.exit_code())
        }
    }
}

/// Log to stderr. `RUST_LOG` wins over `--debug`.
fn init_tracing(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("yap={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}
