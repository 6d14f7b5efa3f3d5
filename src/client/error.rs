use std::time::Duration;

use reqwest::StatusCode;

use crate::transport::{HttpResponse, TransportError};

/// The error document Atlas returns alongside a non-success status.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// The HTTP status code as echoed by Atlas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("Base URL cannot carry a path: {0}")]
    InvalidBaseUrl(String),
    #[error("Invalid user agent: {0}")]
    InvalidUserAgent(#[from] reqwest::header::InvalidHeaderValue),
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
    #[error("Atlas API request failed with status {status}: {message}")]
    Status {
        status: StatusCode,
        message: String,
        details: Option<ApiErrorDetails>,
    },
}

impl ApiError {
    /// Builds a status error from a non-success response, decoding the Atlas
    /// error document when there is one.
    pub(crate) fn from_response(response: &HttpResponse) -> ApiError {
        let details = serde_json::from_slice::<ApiErrorDetails>(&response.body).ok();

        let message = details
            .as_ref()
            .and_then(|details| details.detail.clone().or_else(|| details.reason.clone()))
            .unwrap_or_else(|| String::from_utf8_lossy(&response.body).trim().to_string());
        let message = if message.is_empty() {
            response
                .status
                .canonical_reason()
                .unwrap_or_default()
                .to_string()
        } else {
            message
        };

        ApiError::Status {
            status: response.status,
            message,
            details,
        }
    }

    /// The HTTP status of the failed response, if the server answered.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// The Atlas error code (for example `GROUP_NOT_FOUND`), if one was returned.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                details: Some(details),
                ..
            } => details.error_code.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::json_response;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_response_with_atlas_error() {
        let response = json_response(
            StatusCode::NOT_FOUND,
            r#"{"detail":"No group with ID 123 exists.","error":404,"errorCode":"GROUP_NOT_FOUND","parameters":["123"],"reason":"Not Found"}"#,
        );

        let error = ApiError::from_response(&response);

        assert!(error.is_not_found());
        assert_eq!(error.error_code(), Some("GROUP_NOT_FOUND"));
        assert_eq!(
            error.to_string(),
            "Atlas API request failed with status 404 Not Found: No group with ID 123 exists."
        );
        let ApiError::Status { details, .. } = error else {
            panic!("expected a status error");
        };
        assert_eq!(details.unwrap().error, Some(404));
    }

    #[test]
    fn test_from_response_with_plain_body() {
        let response = json_response(StatusCode::BAD_GATEWAY, "upstream unavailable\n");

        let error = ApiError::from_response(&response);

        assert_eq!(error.status(), Some(StatusCode::BAD_GATEWAY));
        assert_eq!(error.error_code(), None);
        assert_eq!(
            error.to_string(),
            "Atlas API request failed with status 502 Bad Gateway: upstream unavailable"
        );
    }

    #[test]
    fn test_from_response_with_empty_body() {
        let response = json_response(StatusCode::UNAUTHORIZED, "");

        let error = ApiError::from_response(&response);

        assert_eq!(
            error.to_string(),
            "Atlas API request failed with status 401 Unauthorized: Unauthorized"
        );
    }

    #[test]
    fn test_status_is_none_for_other_errors() {
        let error = ApiError::InvalidBaseUrl("mailto:someone".to_string());
        assert_eq!(error.status(), None);
        assert!(!error.is_not_found());
    }
}
