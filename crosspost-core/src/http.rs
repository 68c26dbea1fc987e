//! HTTP client abstraction for backend calls.
//!
//! Every request this crate makes goes through the [`HttpClient`] trait so
//! tests can count and script calls without a network. The default
//! implementation wraps reqwest; the trait-based design allows alternative
//! implementations if needed.

use async_trait::async_trait;
use crate::Error;

/// Status and body of one backend response. Callers decide what a non-2xx
/// status means for their operation.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A generic trait for making authenticated HTTP requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: String, bearer: Option<String>) -> Result<HttpResponse, Error>;
    async fn post(&self, url: String, bearer: Option<String>, body: String) -> Result<HttpResponse, Error>;
    async fn delete(&self, url: String, bearer: Option<String>) -> Result<HttpResponse, Error>;
}

#[derive(Clone)]
pub struct DefaultHttpClient {
    client: reqwest::Client,
}

impl DefaultHttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    async fn finish(request: reqwest::RequestBuilder, bearer: Option<String>) -> Result<HttpResponse, Error> {
        let request = match bearer {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}

impl Default for DefaultHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for DefaultHttpClient {
    async fn get(&self, url: String, bearer: Option<String>) -> Result<HttpResponse, Error> {
        Self::finish(self.client.get(&url), bearer).await
    }

    async fn post(&self, url: String, bearer: Option<String>, body: String) -> Result<HttpResponse, Error> {
        Self::finish(self.client.post(&url).body(body), bearer).await
    }

    async fn delete(&self, url: String, bearer: Option<String>) -> Result<HttpResponse, Error> {
        Self::finish(self.client.delete(&url), bearer).await
    }
}
