//! Payment Page

use leptos::prelude::*;
use checkout_core::{
    CheckoutGateway, CustomerDetails, PAYMENT_METHOD_HIGHLIGHTS, PaymentScreen, SECURITY_HIGHLIGHTS,
};

use crate::api;
use crate::components::{CycleToggle, NoticeBanner, OrderSummary, PlanCard};

#[component]
pub fn PaymentPage() -> impl IntoView {
    let screen = RwSignal::new(PaymentScreen::default());
    let plans = screen.with_untracked(|s| s.catalog().plans().to_vec());

    let submit = move |_| {
        // Real customer data is not wired in yet
        let Some(request) = screen
            .try_update(|s| s.begin_checkout(&CustomerDetails::placeholder()))
            .flatten()
        else {
            return;
        };

        leptos::task::spawn_local(async move {
            let result = match api::gateway() {
                Ok(gateway) => gateway.create_payment(&request).await,
                Err(e) => Err(e),
            };

            if let Err(e) = &result {
                leptos::logging::error!("Checkout failed ({}): {}", e.kind(), e);
            }

            screen.update(|s| {
                s.finish_checkout(result, &api::BrowserNavigator);
            });
        });
    };

    view! {
        <div class="payment">
            <header>
                <a href="/auth/register" class="back">"← Back to sign up"</a>
                <h1>"Complete Subscription"</h1>
                <p class="subtitle">"Choose your plan and payment method"</p>
            </header>

            <NoticeBanner screen=screen />

            <div class="columns">
                <section class="plans">
                    <h2>"Choose your Plan"</h2>

                    <Show when=move || screen.with(|s| s.shows_cycle_toggle())>
                        <CycleToggle screen=screen />
                    </Show>

                    {move || {
                        screen
                            .with(|s| s.selected_plan().note())
                            .map(|note| view! { <p class="plan-note">{note}</p> })
                    }}

                    {plans
                        .into_iter()
                        .map(|plan| view! { <PlanCard plan=plan screen=screen /> })
                        .collect_view()}

                    <div class="payment-method">
                        <h2>"Payment Method"</h2>
                        <p>"Secure payment processed by Hotmart."</p>
                        <p class="muted">"Credit card, PIX, boleto and more options at checkout."</p>
                        <ul class="checklist">
                            {PAYMENT_METHOD_HIGHLIGHTS
                                .into_iter()
                                .map(|item| view! { <li>{item}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                </section>

                <aside class="checkout">
                    <OrderSummary screen=screen />

                    <div class="secure-payment">
                        <h2>"Secure Payment"</h2>
                        <ul class="checklist">
                            {SECURITY_HIGHLIGHTS
                                .into_iter()
                                .map(|item| view! { <li>{item}</li> })
                                .collect_view()}
                        </ul>
                    </div>

                    <button
                        class="btn btn-primary checkout-submit"
                        on:click=submit
                        disabled=move || screen.with(|s| s.is_busy())
                    >
                        {move || screen.with(|s| s.submit_label())}
                    </button>

                    <p class="terms">
                        "By completing, you agree to our "
                        <a href="/terms">"Terms of Service"</a>
                    </p>
                </aside>
            </div>
        </div>
    }
}
