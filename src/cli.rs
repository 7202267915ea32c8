use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use axum::http::header::InvalidHeaderValue;
use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use crate::app::build_app;
use crate::game::DEFAULT_ROUND_SIZE;
use crate::prepare::{WORLD_BANK_GDP_URL, prepare_country_data};
use crate::states::app_state::AppState;

pub const DEFAULT_DATA_FILE: &str = "data/game_data_with_flags.json";

pub const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "https://gdp-matcher.vercel.app",
    "http://localhost:3000",
    "http://127.0.0.1:3000",
];

#[derive(Parser, Debug)]
#[command(
    name = "gdp-matcher",
    version,
    about = "Serve and prepare data for the country GDP matching game."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP game service
    Serve(ServeArgs),

    /// Fetch GDP figures and write the game dataset
    PrepareData(PrepareArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// JSON dataset, re-read on every game request
    #[arg(long, env = "DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// Countries per round when the client does not ask for a count
    #[arg(long, env = "ROUND_SIZE", default_value_t = DEFAULT_ROUND_SIZE)]
    pub round_size: usize,

    /// Origin allowed to call the API; repeat the flag or comma-separate
    #[arg(
        long = "allowed-origin",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_values = DEFAULT_ALLOWED_ORIGINS,
        value_parser = parse_origin,
    )]
    pub allowed_origins: Vec<HeaderValue>,
}

#[derive(Args, Debug)]
pub struct PrepareArgs {
    #[arg(long, default_value = DEFAULT_DATA_FILE)]
    pub output: PathBuf,

    #[arg(long, default_value = WORLD_BANK_GDP_URL)]
    pub source_url: String,
}

#[derive(Debug, Error)]
enum OriginError {
    #[error("wildcard origin is not supported, list each origin instead")]
    Wildcard,

    #[error(transparent)]
    Invalid(#[from] InvalidHeaderValue),
}

fn parse_origin(value: &str) -> Result<HeaderValue, OriginError> {
    let value = value.trim();
    if value == "*" {
        return Err(OriginError::Wildcard);
    }
    Ok(HeaderValue::from_str(value)?)
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve(args).await,
            Commands::PrepareData(args) => {
                prepare_country_data(&args.source_url, &args.output).await?;
                Ok(())
            }
        }
    }
}

async fn serve(args: ServeArgs) -> Result<()> {
    let state = AppState::new(args.data_file, args.round_size);
    let app = build_app(state, args.allowed_origins);

    let addr = SocketAddr::new(args.host, args.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Cannot bind {addr}"))?;
    tracing::info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
