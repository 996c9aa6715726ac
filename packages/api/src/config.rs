//! Client configuration: where the backend lives and where the checkout
//! script is loaded from.
//!
//! The base URL can be pinned at compile time with `COURSEDECK_API_URL`;
//! otherwise the local development default is used.

/// Well-known URL of the hosted checkout script.
pub const CHECKOUT_SCRIPT_URL: &str = "https://checkout.razorpay.com/v1/checkout.js";

const DEFAULT_BASE_URL: &str = "http://localhost:4001/api/v1";

/// Backend endpoint configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the REST backend, without a trailing slash.
    pub base_url: String,
    /// URL the checkout widget script is injected from.
    pub checkout_script_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: option_env!("COURSEDECK_API_URL")
                .unwrap_or(DEFAULT_BASE_URL)
                .to_string(),
            checkout_script_url: CHECKOUT_SCRIPT_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Builder method to point the client at a different backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
