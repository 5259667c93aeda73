use anyhow::{Context, Result};
use gh_client::TokenResolver;
use std::sync::Arc;

mod commands;
mod domain_models;
mod fetcher;
mod logger;
mod reducer;
mod repl;
mod session;
mod state;
mod suggestions;
mod utils;
mod views;

use domain_models::RepoCatalog;
use fetcher::fetch_repositories;
use session::Session;

fn main() -> Result<()> {
    // Load .env before anything reads the environment
    let dotenv = dotenvy::dotenv();

    logger::init();
    log::info!("Starting gh-repo-browser");
    match dotenv {
        Ok(path) => log::debug!("Loaded .env file from: {:?}", path),
        Err(_) => log::debug!(".env file not found, will rely on environment variables"),
    }

    let catalog = load_catalog()?;
    let session = Session::new(Arc::new(catalog), utils::browser::default_launcher());

    repl::run(session)?;

    log::info!("Exiting gh-repo-browser");
    Ok(())
}

/// Fetch every repository before the interactive loop starts
fn load_catalog() -> Result<RepoCatalog> {
    let tokens = TokenResolver::from_env();
    let token = tokens.token()?;
    let host = gh_client::host_from_env();

    println!("Fetching latest list of GitHub repos");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let report = runtime.block_on(async {
        let client = gh_client::connect(token, host.as_deref())?;
        anyhow::Ok(fetch_repositories(&client).await)
    })?;

    report.into_catalog()
}
