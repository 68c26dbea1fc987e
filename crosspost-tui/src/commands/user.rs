// File: crosspost-tui/src/commands/user.rs

use colored::Colorize;
use crosspost_common::Error;
use crosspost_core::analytics::AnalyticsFetcher;
use crosspost_core::profile::ProfileFetcher;

pub async fn handle_profile(profile: &ProfileFetcher) -> String {
    match profile.fetch_profile().await {
        Ok(user) => {
            let verified = if user.is_verified {
                String::new()
            } else {
                " (email not verified)".yellow().to_string()
            };
            format!("{} <{}>{}", user.username.bold(), user.email, verified)
        }
        Err(Error::Auth(msg)) => format!("Not logged in: {}", msg).red().to_string(),
        Err(e) => format!("Could not load profile: {}", e).red().to_string(),
    }
}

pub async fn handle_analytics(args: &[&str], analytics: &AnalyticsFetcher) -> String {
    if args.is_empty() {
        return "Usage: analytics <post-id>".to_string();
    }

    match analytics.fetch_post_analytics(args[0]).await {
        Ok(metrics) => {
            let mut out = String::from("Facebook Post Analytics\n");
            for (name, value) in metrics {
                out.push_str(&format!("  {}: {}\n", name.bold(), value));
            }
            out
        }
        Err(e) => format!("Analytics not available. ({})", e).red().to_string(),
    }
}
