mod app;
mod logic;
mod models;
mod mvu;
mod utils;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "intake=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = app::Cli::parse();
    match app::run(cli) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::from(2)
        }
    }
}
