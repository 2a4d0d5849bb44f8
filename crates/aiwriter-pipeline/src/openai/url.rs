//! Endpoint URL construction

use aiwriter_core::AiWriterError;
use thiserror::Error;
use url::Url;

/// Appends `segments` to the configured base URL.
///
/// The base path is kept, so `https://api.openai.com/v1` + `["models"]`
/// gives `https://api.openai.com/v1/models`.
pub fn endpoint(base: &str, segments: &[&str]) -> Result<Url, UrlError> {
    let mut url = Url::parse(base.trim())?;
    let url_for_error = url.clone();
    url.path_segments_mut()
        .map_err(|_| UrlError::CannotBeABase { url: url_for_error })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// A bad `api_base_url` is a settings problem, found before any request
pub(crate) fn base_url_error(err: UrlError) -> AiWriterError {
    AiWriterError::Settings(format!("invalid api_base_url: {}", err))
}

#[derive(Debug, Error)]
pub enum UrlError {
    #[error("URL cannot be a base: {url}")]
    CannotBeABase { url: Url },

    #[error("Invalid URL: {0}")]
    ParseError(#[from] url::ParseError),
}
