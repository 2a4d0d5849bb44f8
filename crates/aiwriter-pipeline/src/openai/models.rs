//! Credential check via the model listing

use std::time::Duration;

use aiwriter_core::{AiWriterError, Result};
use serde::Serialize;
use serde_json::Value;

use super::status::{check_status, transport_error};
use super::transport::HttpTransport;
use super::url::base_url_error;
use super::{auth_headers, endpoint};

pub const CONNECTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Model ids are reported when they contain one of these
pub const RELEVANT_MODELS: [&str; 4] = ["gpt-3.5-turbo", "gpt-4", "gpt-4-turbo", "gpt-4o"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionReport {
    pub total_models: usize,
    pub available_models: Vec<String>,
}

impl ConnectionReport {
    pub fn message(&self) -> String {
        format!(
            "Connection successful! Found {} available models.",
            self.available_models.len()
        )
    }
}

/// Lists models with `api_key`. An empty key fails without a request.
pub fn test_connection(
    transport: &dyn HttpTransport,
    base_url: &str,
    api_key: &str,
) -> Result<ConnectionReport> {
    let api_key = api_key.trim();
    if api_key.is_empty() {
        return Err(AiWriterError::NoApiKeyForTest);
    }

    let url = endpoint(base_url, &["models"]).map_err(base_url_error)?;
    tracing::debug!(%url, "testing connection");

    let response = transport
        .get(&url, &auth_headers(api_key), CONNECTION_TIMEOUT)
        .map_err(transport_error)?;
    check_status(&response)?;

    let data: Value =
        serde_json::from_str(&response.body).map_err(|_| AiWriterError::InvalidResponse)?;
    let models = data
        .get("data")
        .and_then(Value::as_array)
        .ok_or(AiWriterError::InvalidResponse)?;

    let report = ConnectionReport {
        total_models: models.len(),
        available_models: filter_relevant(models),
    };
    tracing::info!(
        total = report.total_models,
        available = report.available_models.len(),
        "connection ok"
    );
    Ok(report)
}

/// Relevant ids in first-seen order, without duplicates
fn filter_relevant(models: &[Value]) -> Vec<String> {
    let mut available: Vec<String> = Vec::new();
    for id in models.iter().filter_map(|m| m.get("id").and_then(Value::as_str)) {
        let relevant = RELEVANT_MODELS.iter().any(|name| id.contains(name));
        if relevant && !available.iter().any(|seen| seen == id) {
            available.push(id.to_string());
        }
    }
    available
}
