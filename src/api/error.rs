//! Error taxonomy for requests against the meeting service.
//!
//! Validation failures (no file selected, blank query, missing id) never
//! reach this layer; widgets report those before issuing a request.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The local audio file could not be read before upload.
    #[error("Failed to read audio file: {0}")]
    File(#[source] std::io::Error),

    /// Non-2xx response. `detail` carries the server's own message when the
    /// body held one; otherwise the status code is surfaced.
    #[error("{}", server_display(.status, .detail))]
    Server {
        status: StatusCode,
        detail: Option<String>,
    },

    /// The request never produced a response.
    #[error("No response from server. Is it running?")]
    Transport(#[source] reqwest::Error),

    /// 2xx response whose body did not match the expected shape.
    #[error("Received unexpected data from server.")]
    UnexpectedData(#[source] serde_json::Error),
}

fn server_display(status: &StatusCode, detail: &Option<String>) -> String {
    match detail {
        Some(detail) => detail.clone(),
        None => format!("Received status {status} from server."),
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err)
    }
}

/// Result type for service calls.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_prefers_detail() {
        let err = ApiError::Server {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: Some("An error occurred during processing: bad audio".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "An error occurred during processing: bad audio"
        );
    }

    #[test]
    fn test_server_error_falls_back_to_status() {
        let err = ApiError::Server {
            status: StatusCode::BAD_GATEWAY,
            detail: None,
        };
        assert_eq!(err.to_string(), "Received status 502 Bad Gateway from server.");
    }

    #[test]
    fn test_unexpected_data_message() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ApiError::UnexpectedData(parse_err);
        assert_eq!(err.to_string(), "Received unexpected data from server.");
    }
}
