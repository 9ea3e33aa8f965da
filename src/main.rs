//! PageLens binary: argument parsing, tracing init, REPL entry.

use anyhow::Result;
use clap::{Parser, Subcommand};
use pagelens::engine::Engine;
use pagelens::fetch::{HttpFetcher, DEFAULT_TIMEOUT_SECS};
use pagelens::revisit::RevisitStore;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "pagelens",
    version,
    about = "Conversational web page analyst — paste a URL, then ask about the page"
)]
struct Cli {
    /// Revisit log database path (default: ~/.pagelens/visits.db).
    #[arg(long)]
    db: Option<PathBuf>,

    /// Fetch timeout in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Skip the startup banner.
    #[arg(long)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch one page and print its extracted features as JSON.
    Inspect { url: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pagelens=warn".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let fetcher = Arc::new(HttpFetcher::new(Duration::from_secs(cli.timeout_secs)));

    if let Some(Command::Inspect { url }) = &cli.command {
        return pagelens::cli::inspect_cmd::run(fetcher.as_ref(), url).await;
    }

    let store = match &cli.db {
        Some(path) => RevisitStore::open(path)?,
        None => RevisitStore::default_store()?,
    };
    let engine = Engine::new(fetcher, store);

    pagelens::cli::repl::run(engine, cli.quiet).await
}
