mod app;
mod cli;
mod data;
mod enums;
mod error;
mod game;
mod handlers;
mod models;
mod prepare;
mod scoring;
mod states;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gdp_matcher=info")),
        )
        .init();

    Cli::parse().run().await
}
