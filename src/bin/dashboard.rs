//! Dashboard Server Binary
//!
//! Loads the dataset, loads or trains both models, and serves the
//! dashboard page and JSON API over HTTP.

use clap::Parser;
use viralcast::server::Args;
use viralcast::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    viralcast::log();
    viralcast::kys();
    Server::run(Args::parse()).await
}
