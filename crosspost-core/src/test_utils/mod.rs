// File: crosspost-core/src/test_utils/mod.rs
//
// Scripted HTTP client for tests: responses are queued ahead of time and
// every request is recorded so tests can assert on call counts, URLs and
// auth headers.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::http::{HttpClient, HttpResponse};
use crate::Error;

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: &'static str,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Option<String>,
}

#[derive(Default)]
pub struct RecordingHttpClient {
    calls: Mutex<Vec<RecordedCall>>,
    responses: Mutex<VecDeque<Result<HttpResponse, String>>>,
}

impl RecordingHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response for the next request. Unscripted requests get a
    /// 200 with an empty JSON array body.
    pub fn push_response(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
    }

    /// Queues a transport-level failure (connection refused and the like).
    pub fn push_transport_error(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, method: &'static str, url: String, bearer: Option<String>, body: Option<String>) -> Result<HttpResponse, Error> {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            url,
            bearer,
            body,
        });
        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(Error::Io(std::io::Error::other(message))),
            None => Ok(HttpResponse {
                status: 200,
                body: "[]".to_string(),
            }),
        }
    }
}

#[async_trait]
impl HttpClient for RecordingHttpClient {
    async fn get(&self, url: String, bearer: Option<String>) -> Result<HttpResponse, Error> {
        self.record("GET", url, bearer, None)
    }

    async fn post(&self, url: String, bearer: Option<String>, body: String) -> Result<HttpResponse, Error> {
        self.record("POST", url, bearer, Some(body))
    }

    async fn delete(&self, url: String, bearer: Option<String>) -> Result<HttpResponse, Error> {
        self.record("DELETE", url, bearer, None)
    }
}
