//! Plan Catalog
//!
//! Static subscription tiers offered on the payment screen.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{CheckoutError, Result};

/// Subscription plan identifiers (wire format: kebab-case)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlanId {
    PerArticle,
    #[default]
    Professional,
    Institutional,
}

impl PlanId {
    /// All plans, in display order
    pub const ALL: [PlanId; 3] = [PlanId::PerArticle, PlanId::Professional, PlanId::Institutional];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanId::PerArticle => "per-article",
            PlanId::Professional => "professional",
            PlanId::Institutional => "institutional",
        }
    }

    fn index(self) -> usize {
        match self {
            PlanId::PerArticle => 0,
            PlanId::Professional => 1,
            PlanId::Institutional => 2,
        }
    }
}

impl std::fmt::Display for PlanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bullets under the payment-method card
pub const PAYMENT_METHOD_HIGHLIGHTS: [&str; 3] = [
    "Multiple payment methods",
    "Secure processing",
    "Checkout optimized for conversion",
];

/// Bullets on the secure-payment card
pub const SECURITY_HIGHLIGHTS: [&str; 3] = [
    "256-bit SSL encryption",
    "Processed by Hotmart",
    "Protected data",
];

/// How a plan is charged
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BillingMode {
    /// Flat price per generated article
    PerUse,
    /// Customer chooses monthly or yearly
    Flexible,
    /// Yearly contract only
    AnnualOnly,
}

/// Recurrence chosen on the cycle toggle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Yearly => "yearly",
        }
    }
}

/// A catalog entry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: PlanId,

    /// Display name
    pub name: String,

    /// Price per article (per-use plans only)
    pub per_use_price: Decimal,

    pub monthly_price: Decimal,

    pub yearly_price: Decimal,

    /// Feature bullets, display only
    pub features: Vec<String>,

    pub billing: BillingMode,
}

impl Plan {
    /// Whether the monthly/yearly toggle applies to this plan
    pub fn has_cycle_choice(&self) -> bool {
        self.billing == BillingMode::Flexible
    }

    /// Short explanation shown while the plan is selected
    pub fn note(&self) -> Option<&'static str> {
        match self.billing {
            BillingMode::PerUse => {
                Some("You only pay for the articles you generate, no monthly fee.")
            }
            BillingMode::AnnualOnly => {
                Some("Mandatory annual contract with a special discount for universities.")
            }
            BillingMode::Flexible => None,
        }
    }
}

/// The set of plans on offer, exactly one per [`PlanId`]
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    plans: [Plan; 3],
}

impl Catalog {
    /// Build a catalog from arbitrary entries.
    ///
    /// Every plan id must appear exactly once.
    pub fn new(plans: Vec<Plan>) -> Result<Self> {
        let mut slots: [Option<Plan>; 3] = [None, None, None];

        for plan in plans {
            let slot = &mut slots[plan.id.index()];
            if slot.is_some() {
                return Err(CheckoutError::Config(format!("duplicate plan: {}", plan.id)));
            }
            *slot = Some(plan);
        }

        let [a, b, c] = slots;
        match (a, b, c) {
            (Some(a), Some(b), Some(c)) => Ok(Self { plans: [a, b, c] }),
            (a, b, c) => {
                let missing: Vec<&str> = [a.is_none(), b.is_none(), c.is_none()]
                    .into_iter()
                    .zip(PlanId::ALL)
                    .filter(|(absent, _)| *absent)
                    .map(|(_, id)| id.as_str())
                    .collect();
                Err(CheckoutError::Config(format!("missing plans: {}", missing.join(", "))))
            }
        }
    }

    /// The production catalog
    pub fn standard() -> Self {
        Self {
            plans: [
                Plan {
                    id: PlanId::PerArticle,
                    name: "Per Article".into(),
                    per_use_price: dec!(15),
                    monthly_price: dec!(15),
                    yearly_price: dec!(15),
                    features: features(&[
                        "Pay per generated article",
                        "Basic formatting",
                        "Email support",
                        "PDF export",
                    ]),
                    billing: BillingMode::PerUse,
                },
                Plan {
                    id: PlanId::Professional,
                    name: "Professional".into(),
                    per_use_price: dec!(79),
                    monthly_price: dec!(79),
                    yearly_price: dec!(790), // 10 months for the price of 12
                    features: features(&[
                        "5 articles per month",
                        "All features",
                        "Priority support",
                        "Advanced charts",
                    ]),
                    billing: BillingMode::Flexible,
                },
                Plan {
                    id: PlanId::Institutional,
                    name: "Institutional".into(),
                    per_use_price: dec!(2388),
                    monthly_price: dec!(199),
                    yearly_price: dec!(2388),
                    features: features(&[
                        "Unlimited articles",
                        "Multiple users (up to 10)",
                        "Mandatory annual contract",
                        "Custom API",
                        "Dedicated 24/7 support",
                    ]),
                    billing: BillingMode::AnnualOnly,
                },
            ],
        }
    }

    pub fn plan(&self, id: PlanId) -> &Plan {
        &self.plans[id.index()]
    }

    /// Plans in display order
    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn features(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
