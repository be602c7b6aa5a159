//! Command-line park finder
//!
//! Usage: `parkfinder [initial-fragment] [config.json]`
//!
//! After start-up each line on stdin is either a command (`back`, `forward`,
//! `next`, `prev`, `map`, `quit`) or a fragment to navigate to.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

use pf_app::{ConsoleRenderer, ParkFinderApp};
use pf_data::{AppConfig, HttpFetcher};
use pf_views::UiEvent;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let initial = args.next().unwrap_or_default();
    let config = match args.next() {
        Some(path) => AppConfig::load(&path)?,
        None => AppConfig::default(),
    };
    info!("Using API at {}", config.api.origin);

    let fetcher = HttpFetcher::from_config(&config.api).context("invalid API origin")?;
    let app = ParkFinderApp::new(config, Arc::new(fetcher), Arc::new(ConsoleRenderer::new()));

    if let Err(e) = app.start(&initial).await {
        error!("Initial navigation failed: {}", e);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let result = match line.trim() {
            "quit" | "exit" => break,
            "back" => app.back().await,
            "forward" => app.forward().await,
            "next" => app.handle_ui_event(UiEvent::NextPage).await,
            "prev" => app.handle_ui_event(UiEvent::PreviousPage).await,
            "map" => app.handle_ui_event(UiEvent::ToggleMap).await,
            fragment => app.visit(fragment).await,
        };
        if let Err(e) = result {
            error!("{}", e);
        }
    }

    Ok(())
}
