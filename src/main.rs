use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use asuggest::{Config, Vocabulary, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    let vocabulary = Vocabulary::load(config.vocabulary.as_deref())
        .context("could not build the vocabulary")?;
    if vocabulary.is_empty() {
        warn!("Vocabulary is empty; every query will return no suggestions");
    }

    info!("Starting asuggest on {}", config.bind);
    server::serve(config.bind, Arc::new(vocabulary), shutdown_signal())
        .await
        .context("server failed")?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl-C, shutting down"),
        Err(err) => {
            warn!("Could not listen for Ctrl-C: {}", err);
            std::future::pending::<()>().await;
        }
    }
}
