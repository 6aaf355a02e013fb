use crate::service::launch;
use anyhow::Result;
use clap::Parser;

mod cache;
mod cli;
mod config;
mod llm;
mod memory;
mod report;
mod service;
mod store;
mod types;
mod utils;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();
    let spec = args.request_spec()?;
    let config = args.into_config();

    launch(&config, spec).await
}
