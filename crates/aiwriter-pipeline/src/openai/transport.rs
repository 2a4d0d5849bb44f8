//! The outbound HTTP seam

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use thiserror::Error;
use url::Url;

use super::client::{DEFAULT_TIMEOUT, build_client};

/// Status and body of a completed exchange, whatever the status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Failure before any HTTP status was received
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),

    #[error("{0}")]
    Other(String),
}

pub trait HttpTransport {
    fn post(
        &self,
        url: &Url,
        headers: &[(&'static str, String)],
        body: String,
        timeout: Duration,
    ) -> Result<HttpResponse, TransportError>;

    fn get(
        &self,
        url: &Url,
        headers: &[(&'static str, String)],
        timeout: Duration,
    ) -> Result<HttpResponse, TransportError>;
}

/// [`HttpTransport`] over a blocking reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = build_client(DEFAULT_TIMEOUT).map_err(TransportError::Client)?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn send(
        request: RequestBuilder,
        headers: &[(&'static str, String)],
        timeout: Duration,
    ) -> Result<HttpResponse, TransportError> {
        let request = headers
            .iter()
            .fold(request, |req, (name, value)| req.header(*name, value))
            .timeout(timeout);

        let response = request.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(HttpResponse { status, body })
    }
}

impl HttpTransport for ReqwestTransport {
    fn post(
        &self,
        url: &Url,
        headers: &[(&'static str, String)],
        body: String,
        timeout: Duration,
    ) -> Result<HttpResponse, TransportError> {
        let request = self
            .client
            .post(url.as_str())
            .header("Content-Type", "application/json")
            .body(body);
        Self::send(request, headers, timeout)
    }

    fn get(
        &self,
        url: &Url,
        headers: &[(&'static str, String)],
        timeout: Duration,
    ) -> Result<HttpResponse, TransportError> {
        Self::send(self.client.get(url.as_str()), headers, timeout)
    }
}
