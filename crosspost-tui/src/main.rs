// File: crosspost-tui/src/main.rs

use std::io::{stdin, stdout, Write};
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use crosspost_common::traits::TokenProvider;
use crosspost_core::accounts::ConnectionManager;
use crosspost_core::analytics::AnalyticsFetcher;
use crosspost_core::config::ApiConfig;
use crosspost_core::profile::ProfileFetcher;
use crosspost_core::token::{KeyringTokenProvider, StaticTokenProvider};
use crosspost_core::{DefaultHttpClient, HttpClient};

mod commands;

#[derive(Parser, Debug, Clone)]
#[command(name = "crosspost")]
#[command(author, version, about = "Terminal dashboard for managing linked social accounts")]
struct Args {
    /// Backend origin; overrides CROSSPOST_API_URL.
    #[arg(long)]
    api_url: Option<String>,

    /// Session token override; skips the OS keyring lookup.
    #[arg(long)]
    token: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();
    let config = match &args.api_url {
        Some(url) => ApiConfig::new(url.clone()),
        None => ApiConfig::from_env(),
    };
    info!("using backend at {}", config.base_url());

    let tokens: Arc<dyn TokenProvider> = match &args.token {
        Some(token) => Arc::new(StaticTokenProvider::new(token.clone())),
        None => Arc::new(KeyringTokenProvider::new()?),
    };
    let http: Arc<dyn HttpClient> = Arc::new(DefaultHttpClient::new());

    let mut manager = ConnectionManager::new(Arc::clone(&http), Arc::clone(&tokens), &config);
    let profile = ProfileFetcher::new(Arc::clone(&http), Arc::clone(&tokens), config.base_url());
    let analytics = AnalyticsFetcher::new(Arc::clone(&http), Arc::clone(&tokens), config.base_url());

    manager.refresh().await;

    println!("crosspost — manage your social media accounts");
    println!("Type 'help' for commands.");
    print!("{}", commands::accounts::render_accounts(&manager));

    loop {
        print!("> ");
        stdout().flush()?;

        let mut line = String::new();
        if stdin().read_line(&mut line)? == 0 {
            break;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }
        if matches!(parts[0], "quit" | "exit") {
            break;
        }

        let output = commands::dispatch(&parts, &mut manager, &profile, &analytics).await;
        println!("{}", output);
    }

    Ok(())
}
