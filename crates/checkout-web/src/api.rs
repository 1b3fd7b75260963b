//! Browser glue for the checkout request and redirect

use checkout_core::{CheckoutConfig, CheckoutError, HttpGateway, Navigator, Result};

/// Endpoint config, overridable at build time with `CHECKOUT_ENDPOINT`
pub fn config() -> CheckoutConfig {
    CheckoutConfig::from_override(option_env!("CHECKOUT_ENDPOINT"))
}

fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into())
}

/// Gateway pointed at the create-payment endpoint on this origin
pub fn gateway() -> Result<HttpGateway> {
    HttpGateway::from_config(&config(), &origin())
}

/// Full-page redirect via `window.location.href`
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, url: &str) -> Result<()> {
        let window = web_sys::window()
            .ok_or_else(|| CheckoutError::Navigation("no window".into()))?;

        window
            .location()
            .set_href(url)
            .map_err(|e| CheckoutError::Navigation(format!("{e:?}")))
    }
}
