//! Payment Screen State
//!
//! View-model for the checkout page: plan/cycle selection, the derived
//! quote, and the busy flag around the single checkout request.
//!
//! ```text
//!  select_plan / select_cycle ──▶ quote()
//!
//!  begin_checkout ──▶ CreatePaymentRequest ──▶ gateway ──▶ finish_checkout
//!   (busy = true)                                         (busy = false)
//!                                                  ok  ──▶ navigate(url)
//!                                                  err ──▶ generic notice
//! ```

use crate::catalog::{BillingCycle, Catalog, Plan, PlanId};
use crate::error::{CheckoutError, Result};
use crate::gateway::{CheckoutGateway, CheckoutSession, CreatePaymentRequest, CustomerDetails};
use crate::pricing::Quote;

/// Performs the full-page redirect to the hosted checkout
pub trait Navigator {
    fn navigate(&self, url: &str) -> Result<()>;
}

/// What happened to a submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Browser was sent to the hosted checkout
    Redirected(CheckoutSession),
    /// Attempt failed; the notice is what the user sees
    Failed { notice: &'static str },
    /// A request was already in flight
    Skipped,
}

/// Screen state for one page visit
#[derive(Clone, Debug, PartialEq)]
pub struct PaymentScreen {
    catalog: Catalog,
    selected: PlanId,
    cycle: BillingCycle,
    in_flight: bool,
    notice: Option<&'static str>,
}

impl Default for PaymentScreen {
    fn default() -> Self {
        Self::new(Catalog::standard())
    }
}

impl PaymentScreen {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selected: PlanId::default(),
            cycle: BillingCycle::default(),
            in_flight: false,
            notice: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selected(&self) -> PlanId {
        self.selected
    }

    pub fn selected_plan(&self) -> &Plan {
        self.catalog.plan(self.selected)
    }

    /// Raw toggle state; may be stale for fixed-mode plans
    pub fn cycle(&self) -> BillingCycle {
        self.cycle
    }

    pub fn select_plan(&mut self, id: PlanId) {
        self.selected = id;
    }

    pub fn select_cycle(&mut self, cycle: BillingCycle) {
        self.cycle = cycle;
    }

    /// Derived price, label and discount for the current selection
    pub fn quote(&self) -> Quote {
        Quote::new(self.selected_plan(), self.cycle)
    }

    pub fn shows_cycle_toggle(&self) -> bool {
        self.selected_plan().has_cycle_choice()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Text for the submit button
    pub fn submit_label(&self) -> String {
        if self.in_flight {
            "Processing payment...".to_string()
        } else {
            format!("Complete payment - {}", self.quote().price_text())
        }
    }

    /// Start a submission.
    ///
    /// Returns `None` while a previous request is still outstanding.
    pub fn begin_checkout(&mut self, customer: &CustomerDetails) -> Option<CreatePaymentRequest> {
        if self.in_flight {
            tracing::debug!("Checkout already in flight, ignoring submit");
            return None;
        }

        self.in_flight = true;
        self.notice = None;

        // The toggle value goes out as-is, even for fixed-mode plans
        Some(CreatePaymentRequest {
            plan_id: self.selected,
            billing_cycle: self.cycle,
            customer: customer.clone(),
        })
    }

    /// Settle a submission started with [`begin_checkout`](Self::begin_checkout).
    pub fn finish_checkout(
        &mut self,
        result: Result<CheckoutSession>,
        navigator: &dyn Navigator,
    ) -> CheckoutOutcome {
        self.in_flight = false;

        let result = result.and_then(|session| {
            navigator.navigate(&session.checkout_url)?;
            Ok(session)
        });

        match result {
            Ok(session) => {
                tracing::info!(
                    plan = %self.selected,
                    payment_id = session.payment_id.as_deref().unwrap_or("-"),
                    "Redirected to hosted checkout"
                );
                CheckoutOutcome::Redirected(session)
            }
            Err(e) => self.fail(&e),
        }
    }

    /// Run a whole submission against `gateway`
    pub async fn submit<G>(
        &mut self,
        gateway: &G,
        customer: &CustomerDetails,
        navigator: &dyn Navigator,
    ) -> CheckoutOutcome
    where
        G: CheckoutGateway + ?Sized,
    {
        let Some(request) = self.begin_checkout(customer) else {
            return CheckoutOutcome::Skipped;
        };

        let result = gateway.create_payment(&request).await;
        self.finish_checkout(result, navigator)
    }

    fn fail(&mut self, error: &CheckoutError) -> CheckoutOutcome {
        tracing::warn!(kind = error.kind(), error = %error, "Checkout failed");
        let notice = error.user_message();
        self.notice = Some(notice);
        CheckoutOutcome::Failed { notice }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GENERIC_FAILURE_MESSAGE;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::cell::RefCell;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNavigator {
        visits: RefCell<Vec<String>>,
        refuse: bool,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, url: &str) -> Result<()> {
            if self.refuse {
                return Err(CheckoutError::Navigation("blocked".into()));
            }
            self.visits.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    /// Gateway that replies with a canned answer
    struct StubGateway {
        reply: fn() -> Result<CheckoutSession>,
        seen: Mutex<Vec<CreatePaymentRequest>>,
    }

    impl StubGateway {
        fn new(reply: fn() -> Result<CheckoutSession>) -> Self {
            Self { reply, seen: Mutex::new(Vec::new()) }
        }
    }

    #[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
    #[cfg_attr(not(target_arch = "wasm32"), async_trait)]
    impl CheckoutGateway for StubGateway {
        async fn create_payment(&self, request: &CreatePaymentRequest) -> Result<CheckoutSession> {
            self.seen.lock().unwrap().push(request.clone());
            (self.reply)()
        }
    }

    fn session() -> Result<CheckoutSession> {
        Ok(CheckoutSession {
            checkout_url: "https://pay.hotmart.com/X1?off=abc&checkoutMode=10".into(),
            payment_id: Some("HP-1".into()),
        })
    }

    fn rejected() -> Result<CheckoutSession> {
        Err(CheckoutError::Rejected("card declined".into()))
    }

    #[test]
    fn test_defaults() {
        let screen = PaymentScreen::default();
        assert_eq!(screen.selected(), PlanId::Professional);
        assert_eq!(screen.cycle(), BillingCycle::Monthly);
        assert!(screen.shows_cycle_toggle());
        assert!(!screen.is_busy());
        assert_eq!(screen.quote().amount, dec!(79));
    }

    #[test]
    fn test_toggle_hidden_for_fixed_plans() {
        let mut screen = PaymentScreen::default();

        screen.select_plan(PlanId::PerArticle);
        assert!(!screen.shows_cycle_toggle());

        screen.select_plan(PlanId::Institutional);
        assert!(!screen.shows_cycle_toggle());
    }

    #[test]
    fn test_stale_cycle_ignored_for_fixed_plans() {
        let mut screen = PaymentScreen::default();
        screen.select_cycle(BillingCycle::Yearly);
        screen.select_plan(PlanId::PerArticle);

        let quote = screen.quote();
        assert_eq!(quote.amount, dec!(15));
        assert_eq!(quote.discount_percent, 0);

        screen.select_cycle(BillingCycle::Monthly);
        screen.select_plan(PlanId::Institutional);
        assert_eq!(screen.quote().amount, dec!(2388));
    }

    #[test]
    fn test_submit_label() {
        let mut screen = PaymentScreen::default();
        screen.select_cycle(BillingCycle::Yearly);
        assert_eq!(screen.submit_label(), "Complete payment - R$ 790");

        screen.begin_checkout(&CustomerDetails::placeholder());
        assert_eq!(screen.submit_label(), "Processing payment...");
    }

    #[test]
    fn test_begin_checkout_while_in_flight_is_noop() {
        let mut screen = PaymentScreen::default();
        let customer = CustomerDetails::placeholder();

        assert!(screen.begin_checkout(&customer).is_some());
        assert!(screen.is_busy());
        assert!(screen.begin_checkout(&customer).is_none());
        assert!(screen.is_busy());
    }

    #[test]
    fn test_request_sends_toggle_cycle_for_every_plan() {
        for id in PlanId::ALL {
            for cycle in [BillingCycle::Monthly, BillingCycle::Yearly] {
                let mut screen = PaymentScreen::default();
                screen.select_cycle(cycle);
                screen.select_plan(id);

                let request = screen.begin_checkout(&CustomerDetails::placeholder()).unwrap();
                assert_eq!(request.plan_id, id);
                assert_eq!(request.billing_cycle, cycle);
            }
        }
    }

    #[test]
    fn test_annual_only_request_keeps_monthly_toggle() {
        let mut screen = PaymentScreen::default();
        screen.select_plan(PlanId::Institutional);

        let request = screen.begin_checkout(&CustomerDetails::placeholder()).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["plan_id"], "institutional");
        assert_eq!(json["billing_cycle"], "monthly");
        // Price is still the yearly contract
        assert_eq!(screen.quote().amount, dec!(2388));
    }

    #[test]
    fn test_failed_checkout_keeps_selection() {
        let mut screen = PaymentScreen::default();
        screen.select_cycle(BillingCycle::Yearly);
        let before = (screen.selected(), screen.cycle(), screen.quote());

        screen.begin_checkout(&CustomerDetails::placeholder());
        let navigator = RecordingNavigator::default();
        let outcome = screen.finish_checkout(rejected(), &navigator);

        assert_eq!(outcome, CheckoutOutcome::Failed { notice: GENERIC_FAILURE_MESSAGE });
        assert!(!screen.is_busy());
        assert_eq!(screen.notice(), Some(GENERIC_FAILURE_MESSAGE));
        assert_eq!((screen.selected(), screen.cycle(), screen.quote()), before);
        assert!(navigator.visits.borrow().is_empty());
    }

    #[test]
    fn test_navigation_failure_reports_generic_notice() {
        let mut screen = PaymentScreen::default();
        screen.begin_checkout(&CustomerDetails::placeholder());

        let navigator = RecordingNavigator { refuse: true, ..Default::default() };
        let outcome = screen.finish_checkout(session(), &navigator);

        assert!(matches!(outcome, CheckoutOutcome::Failed { .. }));
        assert!(!screen.is_busy());
    }

    #[test]
    fn test_retry_clears_notice() {
        let mut screen = PaymentScreen::default();
        screen.begin_checkout(&CustomerDetails::placeholder());
        screen.finish_checkout(rejected(), &RecordingNavigator::default());
        assert!(screen.notice().is_some());

        screen.begin_checkout(&CustomerDetails::placeholder());
        assert!(screen.notice().is_none());
    }

    #[tokio::test]
    async fn test_submit_success_navigates_once() {
        let mut screen = PaymentScreen::default();
        screen.select_cycle(BillingCycle::Yearly);
        let gateway = StubGateway::new(session);
        let navigator = RecordingNavigator::default();

        let outcome = screen
            .submit(&gateway, &CustomerDetails::placeholder(), &navigator)
            .await;

        assert!(matches!(outcome, CheckoutOutcome::Redirected(_)));
        assert_eq!(
            *navigator.visits.borrow(),
            vec!["https://pay.hotmart.com/X1?off=abc&checkoutMode=10".to_string()]
        );
        assert!(!screen.is_busy());

        let seen = gateway.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].plan_id, PlanId::Professional);
        assert_eq!(seen[0].billing_cycle, BillingCycle::Yearly);
    }

    #[tokio::test]
    async fn test_submit_skipped_while_busy() {
        let mut screen = PaymentScreen::default();
        screen.begin_checkout(&CustomerDetails::placeholder());

        let gateway = StubGateway::new(session);
        let navigator = RecordingNavigator::default();
        let outcome = screen
            .submit(&gateway, &CustomerDetails::placeholder(), &navigator)
            .await;

        assert_eq!(outcome, CheckoutOutcome::Skipped);
        assert!(gateway.seen.lock().unwrap().is_empty());
        assert!(navigator.visits.borrow().is_empty());
        assert!(screen.is_busy());
    }

    #[tokio::test]
    async fn test_submit_failure_then_retry() {
        let mut screen = PaymentScreen::default();
        let navigator = RecordingNavigator::default();
        let customer = CustomerDetails::placeholder();

        let failing = StubGateway::new(rejected);
        let outcome = screen.submit(&failing, &customer, &navigator).await;
        assert!(matches!(outcome, CheckoutOutcome::Failed { .. }));
        assert!(!screen.is_busy());

        let working = StubGateway::new(session);
        let outcome = screen.submit(&working, &customer, &navigator).await;
        assert!(matches!(outcome, CheckoutOutcome::Redirected(_)));
        assert_eq!(navigator.visits.borrow().len(), 1);
    }
}
