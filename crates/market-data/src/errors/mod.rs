//! Error types for the quote API client.
//!
//! [`ApiError`] covers every failure of the two API operations. Coordinators
//! catch these at their boundary and degrade to "no results" / "no quotes".

use thiserror::Error;

use crate::models::ErrorResponse;

/// Errors that can occur while talking to the quote API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request URL could not be built from the base URL and path.
    /// Unreachable with the fixed endpoint templates and a valid base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The transport returned something that is not a readable HTTP response.
    #[error("Invalid Response Type")]
    InvalidResponseType,

    /// The server reported a failure: either a status outside the accepted
    /// ranges, or a decoded `error` object in the response envelope.
    #[error("{}", status_message(.status_code, .error))]
    HttpStatusFailed {
        /// HTTP status code of the response
        status_code: u16,
        /// Structured error from the envelope, if one was decoded
        error: Option<ErrorResponse>,
    },

    /// The request never produced a response (connect failure, timeout, ...).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The body was not the expected JSON envelope.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Numeric code for the error kind.
    ///
    /// ```
    /// use tickerwatch_market_data::ApiError;
    ///
    /// let error = ApiError::HttpStatusFailed { status_code: 503, error: None };
    /// assert_eq!(error.code(), 3);
    /// assert_eq!(ApiError::InvalidResponseType.code(), 2);
    /// ```
    pub fn code(&self) -> u8 {
        match self {
            Self::InvalidUrl(_) => 1,
            Self::InvalidResponseType => 2,
            Self::HttpStatusFailed { .. } => 3,
            Self::Network(_) => 4,
            Self::Decode(_) => 5,
        }
    }

    /// Status code of a server-reported failure.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatusFailed { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Short human-readable text, without transport details.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidUrl(_) => "Invalid URL".to_string(),
            Self::InvalidResponseType | Self::Decode(_) => "Invalid Response Type".to_string(),
            Self::HttpStatusFailed { status_code, error } => status_message(status_code, error),
            Self::Network(_) => "Network Error".to_string(),
        }
    }

    /// Shorthand for a bare status failure without a decoded error body.
    pub fn status(status_code: u16) -> Self {
        Self::HttpStatusFailed {
            status_code,
            error: None,
        }
    }
}

fn status_message(status_code: &u16, error: &Option<ErrorResponse>) -> String {
    match error {
        Some(error) => format!(
            "Error: Status Code {}, message: {}",
            error.code, error.description
        ),
        None => format!("Error: Status Code {}", status_code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let url_error = url::Url::parse("not a url").unwrap_err();
        assert_eq!(ApiError::InvalidUrl(url_error).code(), 1);
        assert_eq!(ApiError::InvalidResponseType.code(), 2);
        assert_eq!(ApiError::status(500).code(), 3);

        let decode_error = serde_json::from_str::<u8>("nope").unwrap_err();
        assert_eq!(ApiError::Decode(decode_error).code(), 5);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", ApiError::InvalidResponseType),
            "Invalid Response Type"
        );
        assert_eq!(
            format!("{}", ApiError::status(502)),
            "Error: Status Code 502"
        );

        let error = ApiError::HttpStatusFailed {
            status_code: 404,
            error: Some(ErrorResponse::new("Not Found", "No data found for symbol")),
        };
        assert_eq!(
            format!("{}", error),
            "Error: Status Code Not Found, message: No data found for symbol"
        );
    }

    #[test]
    fn test_user_message() {
        let url_error = url::Url::parse("not a url").unwrap_err();
        assert_eq!(ApiError::InvalidUrl(url_error).user_message(), "Invalid URL");
        assert_eq!(
            ApiError::InvalidResponseType.user_message(),
            "Invalid Response Type"
        );
        assert_eq!(ApiError::status(500).user_message(), "Error: Status Code 500");
    }

    #[test]
    fn test_status_code_accessor() {
        assert_eq!(ApiError::status(429).status_code(), Some(429));
        assert_eq!(ApiError::InvalidResponseType.status_code(), None);
    }
}
