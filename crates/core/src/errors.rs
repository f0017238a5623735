//! Core error types for the tickerwatch application.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the edges of the application (opener, configuration,
/// store handle). API and storage failures never get here: coordinators
/// absorb [`ApiError`](tickerwatch_market_data::ApiError) and
/// [`StorageError`](crate::storage::StorageError) at their boundary.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to open {url}: {message}")]
    Open { url: String, message: String },

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Store is no longer running")]
    StoreStopped,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = Error::Open {
            url: "https://finance.yahoo.com".into(),
            message: "launcher exited with 1".into(),
        };
        assert_eq!(
            format!("{}", error),
            "Failed to open https://finance.yahoo.com: launcher exited with 1"
        );
        assert_eq!(
            format!("{}", Error::StoreStopped),
            "Store is no longer running"
        );
    }
}
