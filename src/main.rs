mod cmd;

use clap::Parser;
use cmd::Cli;
use std::io::IsTerminal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose());

    if let Err(e) = cmd::run(cli).await {
        tracing::error!("{e:#}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so `--output -` keeps stdout clean
fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let format = fmt::format()
        .with_target(false)
        .with_thread_ids(false)
        .with_line_number(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::Layer::default()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .event_format(format),
        )
        .init();
}
