mod cli;
mod signal;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

use sweeper_core::Sweeper;
use sweeper_github::GitHubClient;

use cli::{Cli, VERSION};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if cli.version {
        println!("{VERSION}");
        return;
    }

    let settings = match cli.into_settings() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    };

    // Warnings and errors go to stderr, everything else to stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(
            std::io::stderr
                .with_max_level(Level::WARN)
                .or_else(std::io::stdout),
        )
        .init();

    if let Err(e) = signal::spawn_watcher() {
        tracing::error!(error = %e, "Failed to install signal handlers");
    }

    let client = match GitHubClient::new(settings.github) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create GitHub client");
            std::process::exit(1);
        },
    };

    let mut sweeper = Sweeper::new(client, settings.sweeper);
    let err = sweeper.run().await;
    tracing::error!("{err}");
    std::process::exit(err.exit_code());
}
