//! HTTP status to error mapping shared by both endpoints

use aiwriter_core::{AiWriterError, Result};
use serde_json::Value;

use super::transport::{HttpResponse, TransportError};
use crate::content::text::sanitize_text;

const UNKNOWN_ERROR: &str = "Unknown error occurred.";

/// Passes 200 through, maps everything else.
pub fn check_status(response: &HttpResponse) -> Result<()> {
    match response.status {
        200 => Ok(()),
        401 => Err(AiWriterError::Auth),
        403 => Err(AiWriterError::Forbidden),
        429 => Err(AiWriterError::RateLimited),
        500 | 502 | 503 => Err(AiWriterError::ServiceUnavailable),
        status => Err(AiWriterError::Api {
            status,
            message: extract_error_message(&response.body),
        }),
    }
}

pub fn transport_error(err: TransportError) -> AiWriterError {
    tracing::warn!(error = %err, "request failed before a response arrived");
    AiWriterError::Network(err.to_string())
}

/// `error.message`, then `message`, then `detail`
pub fn extract_error_message(body: &str) -> String {
    let Ok(data) = serde_json::from_str::<Value>(body) else {
        return UNKNOWN_ERROR.to_string();
    };

    let candidates = [
        data.pointer("/error/message"),
        data.get("message"),
        data.get("detail"),
    ];

    candidates
        .into_iter()
        .flatten()
        .find_map(|value| match value {
            Value::String(s) => Some(sanitize_text(s)),
            Value::Null => None,
            other => Some(sanitize_text(&other.to_string())),
        })
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_status_mapping() {
        assert!(check_status(&response(200, "{}")).is_ok());
        assert!(matches!(check_status(&response(401, "")), Err(AiWriterError::Auth)));
        assert!(matches!(check_status(&response(403, "")), Err(AiWriterError::Forbidden)));
        assert!(matches!(check_status(&response(429, "")), Err(AiWriterError::RateLimited)));
        for status in [500, 502, 503] {
            assert!(matches!(
                check_status(&response(status, "")),
                Err(AiWriterError::ServiceUnavailable)
            ));
        }
    }

    #[test]
    fn test_other_status_carries_message() {
        let err = check_status(&response(404, r#"{"error":{"message":"No such model"}}"#)).unwrap_err();
        assert_eq!(err.to_string(), "API request failed with status 404: No such model");

        // 201 is not treated as success
        let err = check_status(&response(201, "")).unwrap_err();
        assert!(matches!(err, AiWriterError::Api { status: 201, .. }));
    }

    #[test]
    fn test_extract_error_message_order() {
        assert_eq!(
            extract_error_message(r#"{"message":"flat","detail":"later"}"#),
            "flat"
        );
        assert_eq!(extract_error_message(r#"{"detail":"  <b>bad</b>   gateway "}"#), "bad gateway");
        assert_eq!(extract_error_message(r#"{"other":1}"#), "Unknown error occurred.");
        assert_eq!(extract_error_message("<html>oops</html>"), "Unknown error occurred.");
    }
}
