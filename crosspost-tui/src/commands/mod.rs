// File: crosspost-tui/src/commands/mod.rs

pub mod accounts;
pub mod user;

use crosspost_core::accounts::ConnectionManager;
use crosspost_core::analytics::AnalyticsFetcher;
use crosspost_core::profile::ProfileFetcher;

pub async fn dispatch(
    args: &[&str],
    manager: &mut ConnectionManager,
    profile: &ProfileFetcher,
    analytics: &AnalyticsFetcher,
) -> String {
    match args[0] {
        "accounts" | "list" => accounts::render_accounts(manager),
        "refresh" => accounts::handle_refresh(manager).await,
        "connect" => accounts::handle_connect(&args[1..], manager).await,
        "disconnect" => accounts::handle_disconnect(&args[1..], manager).await,
        "profile" => user::handle_profile(profile).await,
        "analytics" => user::handle_analytics(&args[1..], analytics).await,
        _ => r#"Commands:
  accounts                 show platform cards
  refresh                  re-fetch connected accounts
  connect <platform>       start the connect flow for a platform
  disconnect <platform>    disconnect a platform (asks for confirmation)
  profile                  show the logged-in user
  analytics <post-id>      show Facebook post analytics
  quit
"#
        .to_string(),
    }
}
