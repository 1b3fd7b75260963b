//! Price Derivation
//!
//! Everything shown as a price is computed here from `(plan, cycle)` and
//! nothing else. Uses `rust_decimal` for all amounts.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::catalog::{BillingCycle, BillingMode, Plan, PlanId};

/// Currency symbol for displayed prices (Brazilian real)
pub const CURRENCY_SYMBOL: &str = "R$";

/// Human-readable billing description for a selection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BillingLabel {
    PerUse,
    Monthly,
    Yearly,
    AnnualRequired,
}

impl BillingLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingLabel::PerUse => "per-use",
            BillingLabel::Monthly => "monthly",
            BillingLabel::Yearly => "yearly",
            BillingLabel::AnnualRequired => "annual (required)",
        }
    }

    /// Unit shown after a price, e.g. "R$ 79 / month"
    pub fn unit(&self) -> &'static str {
        match self {
            BillingLabel::PerUse => "article",
            BillingLabel::Monthly => "month",
            BillingLabel::Yearly | BillingLabel::AnnualRequired => "year",
        }
    }
}

impl std::fmt::Display for BillingLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived pricing for the current selection
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Quote {
    pub plan: PlanId,
    pub amount: Decimal,
    pub label: BillingLabel,
    /// Whole percent saved versus twelve monthly payments
    pub discount_percent: i64,
}

impl Quote {
    pub fn new(plan: &Plan, cycle: BillingCycle) -> Self {
        let (amount, label) = match plan.billing {
            BillingMode::PerUse => (plan.per_use_price, BillingLabel::PerUse),
            BillingMode::AnnualOnly => (plan.yearly_price, BillingLabel::AnnualRequired),
            BillingMode::Flexible => match cycle {
                BillingCycle::Monthly => (plan.monthly_price, BillingLabel::Monthly),
                BillingCycle::Yearly => (plan.yearly_price, BillingLabel::Yearly),
            },
        };

        Self {
            plan: plan.id,
            amount,
            label,
            discount_percent: discount_percent(plan, cycle),
        }
    }

    pub fn has_discount(&self) -> bool {
        self.discount_percent > 0
    }

    /// Display string for the amount
    pub fn price_text(&self) -> String {
        format_price(self.amount)
    }

    /// Order-summary bullets describing the recurrence
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("Recurring charge: {}", self.label),
            "Cancel at any time".to_string(),
            "Support included".to_string(),
        ]
    }
}

/// Percent saved by paying yearly on a flexible plan.
///
/// `round(100 * (1 - yearly / (monthly * 12)))`, halves rounding up.
/// Zero for every other combination.
pub fn discount_percent(plan: &Plan, cycle: BillingCycle) -> i64 {
    if plan.billing != BillingMode::Flexible || cycle != BillingCycle::Yearly {
        return 0;
    }

    let twelve_months = plan.monthly_price * dec!(12);
    if twelve_months.is_zero() {
        return 0;
    }

    let percent = (Decimal::ONE - plan.yearly_price / twelve_months) * dec!(100);
    let rounded = (percent + dec!(0.5)).floor();
    rounded.to_i64().unwrap_or(0)
}

/// Price shown on a catalog card for the current toggle state.
///
/// Cards follow the toggle for every recurring plan, annual-only included;
/// only the order summary applies the billing-mode rule.
pub fn card_price(plan: &Plan, cycle: BillingCycle) -> (Decimal, BillingLabel) {
    match (plan.billing, cycle) {
        (BillingMode::PerUse, _) => (plan.per_use_price, BillingLabel::PerUse),
        (_, BillingCycle::Monthly) => (plan.monthly_price, BillingLabel::Monthly),
        (_, BillingCycle::Yearly) => (plan.yearly_price, BillingLabel::Yearly),
    }
}

/// Format an amount as "R$ 79"
pub fn format_price(amount: Decimal) -> String {
    format!("{} {}", CURRENCY_SYMBOL, amount.normalize())
}
