//! # checkout-core
//!
//! Plan selection, pricing and hosted-checkout initiation for the
//! subscription payment screen.
//!
//! ## Flow
//!
//! The screen never touches card data. It asks the backend for a
//! vendor-hosted checkout page and sends the browser there:
//!
//! ```text
//! ┌─────────────┐  POST plan/cycle  ┌─────────────┐   hosted URL   ┌─────────────────┐
//! │  Payment    │──────────────────▶│  Backend    │───────────────▶│  Vendor Hosted  │
//! │  screen     │◀──────────────────│  endpoint   │                │  Checkout Page  │
//! └─────────────┘  { checkout_url } └─────────────┘                └─────────────────┘
//!        │                                                                 ▲
//!        └──────────────────── window.location = checkout_url ─────────────┘
//! ```
//!
//! Payment capture, webhooks and subscription storage all live on the far
//! side of that redirect.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use checkout_core::{BillingCycle, CustomerDetails, HttpGateway, PaymentScreen, PlanId};
//!
//! let mut screen = PaymentScreen::default();
//! screen.select_plan(PlanId::Professional);
//! screen.select_cycle(BillingCycle::Yearly);
//!
//! let quote = screen.quote();
//! assert_eq!(quote.discount_percent, 17);
//!
//! let gateway = HttpGateway::new("https://iartigo.com.br/api/hotmart/create-payment");
//! let outcome = screen.submit(&gateway, &CustomerDetails::placeholder(), &navigator).await;
//! ```

mod catalog;
mod config;
mod error;
mod gateway;
mod pricing;
mod screen;

pub use catalog::{
    BillingCycle, BillingMode, Catalog, PAYMENT_METHOD_HIGHLIGHTS, Plan, PlanId,
    SECURITY_HIGHLIGHTS,
};
pub use config::{CheckoutConfig, DEFAULT_ENDPOINT};
pub use error::{CheckoutError, GENERIC_FAILURE_MESSAGE, Result};
pub use gateway::{
    CheckoutGateway, CheckoutSession, CreatePaymentRequest, CreatePaymentResponse,
    CustomerDetails, HttpGateway,
};
pub use pricing::{BillingLabel, CURRENCY_SYMBOL, Quote, card_price, discount_percent, format_price};
pub use screen::{CheckoutOutcome, Navigator, PaymentScreen};
