//! Checkout Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, CheckoutError>;

/// Text shown to the user for every failed checkout attempt
pub const GENERIC_FAILURE_MESSAGE: &str = "Payment failed. Please try again.";

/// Checkout-related errors
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// Backend answered `success: false`
    #[error("Checkout rejected: {0}")]
    Rejected(String),

    /// Backend answered with a non-success HTTP status
    #[error("Checkout endpoint returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Request never got a response
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response did not have the expected shape
    #[error("Malformed checkout response: {0}")]
    Malformed(String),

    /// Browser refused the redirect
    #[error("Navigation failed: {0}")]
    Navigation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CheckoutError {
    /// Stable tag for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            CheckoutError::Rejected(_) => "rejected",
            CheckoutError::Status { .. } => "http_status",
            CheckoutError::Network(_) => "network",
            CheckoutError::Malformed(_) => "malformed",
            CheckoutError::Navigation(_) => "navigation",
            CheckoutError::Config(_) => "config",
        }
    }

    /// Get user-friendly message.
    ///
    /// The cause is never surfaced to the user; it only goes to the logs.
    pub fn user_message(&self) -> &'static str {
        GENERIC_FAILURE_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_failures_share_user_message() {
        let errors = [
            CheckoutError::Rejected("card declined".into()),
            CheckoutError::Status { status: 502, message: "bad gateway".into() },
            CheckoutError::Malformed("missing field `success`".into()),
            CheckoutError::Navigation("blocked".into()),
        ];

        for error in &errors {
            assert_eq!(error.user_message(), GENERIC_FAILURE_MESSAGE);
        }
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(CheckoutError::Rejected(String::new()).kind(), "rejected");
        assert_eq!(
            CheckoutError::Status { status: 500, message: String::new() }.kind(),
            "http_status"
        );
        assert_eq!(CheckoutError::Malformed(String::new()).kind(), "malformed");
    }
}
