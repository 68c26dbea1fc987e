// File: crosspost-core/src/status.rs

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

/// How long a banner message stays visible before the timer clears it.
pub const STATUS_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

/// Transient status line. Each `set` replaces the current message and arms
/// a fresh expiry timer; the previous timer is aborted so an old message
/// can never clear a newer one. Dropping the banner aborts the timer too.
pub struct StatusBanner {
    current: Arc<Mutex<Option<StatusMessage>>>,
    expiry: Option<JoinHandle<()>>,
    ttl: Duration,
}

impl StatusBanner {
    pub fn new() -> Self {
        Self::with_ttl(STATUS_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            current: Arc::new(Mutex::new(None)),
            expiry: None,
            ttl,
        }
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.set(StatusKind::Success, text);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.set(StatusKind::Error, text);
    }

    pub fn set(&mut self, kind: StatusKind, text: impl Into<String>) {
        if let Some(handle) = self.expiry.take() {
            handle.abort();
        }
        let message = StatusMessage { kind, text: text.into() };
        *self.current.lock().unwrap() = Some(message);

        let slot = Arc::clone(&self.current);
        let ttl = self.ttl;
        self.expiry = Some(tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            *slot.lock().unwrap() = None;
        }));
    }

    pub fn current(&self) -> Option<StatusMessage> {
        self.current.lock().unwrap().clone()
    }

    pub fn clear(&mut self) {
        if let Some(handle) = self.expiry.take() {
            handle.abort();
        }
        *self.current.lock().unwrap() = None;
    }
}

impl Default for StatusBanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for StatusBanner {
    fn drop(&mut self) {
        if let Some(handle) = self.expiry.take() {
            handle.abort();
        }
    }
}
