// File: crosspost-tui/src/commands/accounts.rs

use std::io::{stdin, stdout, Write};
use std::str::FromStr;

use colored::Colorize;
use crosspost_common::models::Platform;
use crosspost_core::accounts::{ConnectOutcome, ConnectionManager};
use crosspost_core::status::{StatusKind, StatusMessage};

/// One line per catalog entry, banner first if one is showing.
pub fn render_accounts(manager: &ConnectionManager) -> String {
    let mut out = String::new();
    if let Some(status) = manager.status() {
        out.push_str(&render_status(&status));
        out.push('\n');
    }
    for view in manager.views() {
        let state = if view.connected {
            if view.account_name.is_empty() {
                "connected".green().to_string()
            } else {
                format!("connected as {}", view.account_name).green().to_string()
            }
        } else {
            "not connected".dimmed().to_string()
        };
        out.push_str(&format!("[{}] {:<12} {}\n", view.icon, view.display_name, state));
    }
    out
}

pub async fn handle_refresh(manager: &mut ConnectionManager) -> String {
    manager.refresh().await;
    render_accounts(manager)
}

pub async fn handle_connect(args: &[&str], manager: &mut ConnectionManager) -> String {
    if args.is_empty() {
        return "Usage: connect <platform>".to_string();
    }
    let platform = match Platform::from_str(args[0]) {
        Ok(platform) => platform,
        Err(e) => return e,
    };

    match manager.connect(platform).await {
        ConnectOutcome::Redirect(url) => {
            if let Err(e) = open::that(&url) {
                return format!("Open this URL in your browser to continue: {} ({})", url, e);
            }
            format!("Continuing the {} login in your browser.", platform)
        }
        ConnectOutcome::Linked => render_accounts(manager),
        ConnectOutcome::ConfirmRequested => confirm_pending_disconnect(manager).await,
        ConnectOutcome::Rejected => status_line(manager),
    }
}

pub async fn handle_disconnect(args: &[&str], manager: &mut ConnectionManager) -> String {
    if args.is_empty() {
        return "Usage: disconnect <platform>".to_string();
    }
    let platform = match Platform::from_str(args[0]) {
        Ok(platform) => platform,
        Err(e) => return e,
    };

    manager.request_disconnect(platform);
    if manager.pending_disconnect() != Some(platform) {
        return format!("{} is not connected.", platform);
    }
    confirm_pending_disconnect(manager).await
}

/// The secondary confirmation the disconnect flow is gated behind.
async fn confirm_pending_disconnect(manager: &mut ConnectionManager) -> String {
    let Some(platform) = manager.pending_disconnect() else {
        return String::new();
    };
    let name = manager
        .view(platform)
        .map(|v| v.display_name)
        .unwrap_or("this platform");

    print!("Disconnect {}? You will need to reauthorize it to post again. (y/N) ", name);
    if stdout().flush().is_err() {
        manager.cancel_disconnect();
        return "Cancelled.".to_string();
    }

    let mut answer = String::new();
    if stdin().read_line(&mut answer).is_err() || !answer.trim().eq_ignore_ascii_case("y") {
        manager.cancel_disconnect();
        return "Cancelled.".to_string();
    }

    manager.confirm_disconnect().await;
    status_line(manager)
}

fn status_line(manager: &ConnectionManager) -> String {
    manager
        .status()
        .map(|status| render_status(&status))
        .unwrap_or_default()
}

fn render_status(status: &StatusMessage) -> String {
    match status.kind {
        StatusKind::Success => status.text.green().to_string(),
        StatusKind::Error => status.text.red().to_string(),
    }
}
