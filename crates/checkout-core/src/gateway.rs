//! Hosted Checkout Gateway
//!
//! Asks the backend for a vendor-hosted checkout URL. The backend (and the
//! payment vendor behind it) own everything after that.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::catalog::{BillingCycle, PlanId};
use crate::config::CheckoutConfig;
use crate::error::{CheckoutError, Result};

/// Contact fields sent along with the plan selection
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Tax document number (CPF)
    pub document: String,
}

impl CustomerDetails {
    /// Fixed values sent until real customer data is wired in
    pub fn placeholder() -> Self {
        Self {
            name: "Customer Name".into(),
            email: "customer@email.com".into(),
            phone: "(11) 99999-9999".into(),
            document: "123.456.789-00".into(),
        }
    }
}

/// Body of the create-payment call
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePaymentRequest {
    pub plan_id: PlanId,
    pub billing_cycle: BillingCycle,
    pub customer: CustomerDetails,
}

/// Raw create-payment response, before validation
#[derive(Clone, Debug, Deserialize)]
pub struct CreatePaymentResponse {
    pub success: bool,

    #[serde(default)]
    pub checkout_url: Option<String>,

    #[serde(default)]
    pub payment_id: Option<String>,

    #[serde(default)]
    pub error: Option<String>,
}

impl CreatePaymentResponse {
    /// Validate into a session or a checkout error
    pub fn into_session(self) -> Result<CheckoutSession> {
        if !self.success {
            return Err(CheckoutError::Rejected(
                self.error.unwrap_or_else(|| "no error description".into()),
            ));
        }

        match self.checkout_url {
            Some(url) if !url.trim().is_empty() => Ok(CheckoutSession {
                checkout_url: url,
                payment_id: self.payment_id,
            }),
            _ => Err(CheckoutError::Malformed("success without checkout_url".into())),
        }
    }
}

/// A checkout the vendor is ready to take over
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Vendor-hosted page, used verbatim
    pub checkout_url: String,

    /// Opaque payment/session identifier
    pub payment_id: Option<String>,
}

/// Anything that can turn a selection into a hosted checkout
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait CheckoutGateway {
    async fn create_payment(&self, request: &CreatePaymentRequest) -> Result<CheckoutSession>;
}

/// Gateway that POSTs JSON to the backend endpoint
#[derive(Clone, Debug)]
pub struct HttpGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpGateway {
    /// Create a gateway for an absolute endpoint URL
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Create from config, resolving relative endpoints against `origin`
    pub fn from_config(config: &CheckoutConfig, origin: &str) -> Result<Self> {
        Ok(Self::new(config.resolve_endpoint(origin)?))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl CheckoutGateway for HttpGateway {
    async fn create_payment(&self, request: &CreatePaymentRequest) -> Result<CheckoutSession> {
        tracing::debug!(
            plan = %request.plan_id,
            cycle = request.billing_cycle.as_str(),
            endpoint = %self.endpoint,
            "Requesting hosted checkout"
        );

        let response = self.client.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<CreatePaymentResponse>(&body)
                .ok()
                .and_then(|r| r.error)
                .unwrap_or(body);
            return Err(CheckoutError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: CreatePaymentResponse = serde_json::from_str(&body)
            .map_err(|e| CheckoutError::Malformed(e.to_string()))?;

        parsed.into_session()
    }
}
