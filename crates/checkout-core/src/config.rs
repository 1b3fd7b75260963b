//! Checkout Configuration

use crate::error::{CheckoutError, Result};

/// Backend route that creates a hosted checkout
pub const DEFAULT_ENDPOINT: &str = "/api/hotmart/create-payment";

/// Where checkout requests are sent
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckoutConfig {
    /// Absolute URL, or a path relative to the page origin
    pub endpoint: String,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl CheckoutConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Use `endpoint` when set and non-blank, otherwise the default route.
    ///
    /// Fed from `CHECKOUT_ENDPOINT` by the caller.
    pub fn from_override(endpoint: Option<&str>) -> Self {
        endpoint
            .filter(|v| !v.trim().is_empty())
            .map(Self::new)
            .unwrap_or_default()
    }

    /// Full URL for the endpoint as seen from `origin`
    pub fn resolve_endpoint(&self, origin: &str) -> Result<String> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err(CheckoutError::Config("checkout endpoint is empty".into()));
        }

        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            return Ok(endpoint.to_string());
        }

        let origin = origin.trim_end_matches('/');
        if origin.is_empty() {
            return Err(CheckoutError::Config(format!(
                "relative endpoint {endpoint} needs a page origin"
            )));
        }

        if endpoint.starts_with('/') {
            Ok(format!("{origin}{endpoint}"))
        } else {
            Ok(format!("{origin}/{endpoint}"))
        }
    }
}
