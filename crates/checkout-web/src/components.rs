//! UI Components

use leptos::prelude::*;
use checkout_core::{BillingCycle, PaymentScreen, Plan, card_price, format_price};

/// Selectable plan card
#[component]
pub fn PlanCard(plan: Plan, screen: RwSignal<PaymentScreen>) -> impl IntoView {
    let id = plan.id;
    let is_selected = move || screen.with(|s| s.selected() == id);

    let card_plan = plan.clone();
    let price = Memo::new(move |_| {
        let cycle = screen.with(|s| s.cycle());
        let (amount, label) = card_price(&card_plan, cycle);
        (format_price(amount), label.unit())
    });

    view! {
        <div
            class="plan"
            class:selected=is_selected
            on:click=move |_| screen.update(|s| s.select_plan(id))
        >
            <div class="plan-header">
                <h3>{plan.name.clone()}</h3>
                <div class="price">
                    {move || price.get().0}
                    <span>"/" {move || price.get().1}</span>
                </div>
            </div>
            <ul>
                {plan
                    .features
                    .iter()
                    .map(|feature| view! { <li>{feature.clone()}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

/// Monthly / yearly switch for flexible plans
#[component]
pub fn CycleToggle(screen: RwSignal<PaymentScreen>) -> impl IntoView {
    let cycle = move || screen.with(|s| s.cycle());
    let discount = move || screen.with(|s| s.quote().discount_percent);

    view! {
        <div class="cycle-toggle">
            <button
                class="btn btn-sm"
                class:active=move || cycle() == BillingCycle::Monthly
                on:click=move |_| screen.update(|s| s.select_cycle(BillingCycle::Monthly))
            >
                "Monthly"
            </button>
            <button
                class="btn btn-sm"
                class:active=move || cycle() == BillingCycle::Yearly
                on:click=move |_| screen.update(|s| s.select_cycle(BillingCycle::Yearly))
            >
                "Yearly"
                <Show when=move || { discount() > 0 }>
                    <span class="badge">{move || format!("-{}%", discount())}</span>
                </Show>
            </button>
        </div>
    }
}

/// Price breakdown for the current selection
#[component]
pub fn OrderSummary(screen: RwSignal<PaymentScreen>) -> impl IntoView {
    let quote = Memo::new(move |_| screen.with(|s| s.quote()));
    let plan_name = move || screen.with(|s| s.selected_plan().name.clone());

    view! {
        <div class="summary">
            <h2>"Order Summary"</h2>
            <div class="row">
                <span>{move || format!("{} plan", plan_name())}</span>
                <span>{move || quote.get().price_text()}</span>
            </div>
            <div class="row muted">
                <span>"Billing"</span>
                <span>{move || quote.get().label.as_str()}</span>
            </div>
            <Show when=move || quote.get().has_discount()>
                <div class="row discount">
                    <span>"Annual discount"</span>
                    <span>{move || format!("-{}%", quote.get().discount_percent)}</span>
                </div>
            </Show>
            <hr />
            <div class="row total">
                <span>"Total"</span>
                <span>{move || quote.get().price_text()}</span>
            </div>
            <ul class="terms">
                {move || {
                    quote
                        .get()
                        .summary_lines()
                        .into_iter()
                        .map(|line| view! { <li>{line}</li> })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

/// Generic error shown after a failed checkout attempt
#[component]
pub fn NoticeBanner(screen: RwSignal<PaymentScreen>) -> impl IntoView {
    let notice = move || screen.with(|s| s.notice());

    view! {
        {move || {
            notice()
                .map(|text| {
                    view! {
                        <div class="notice error" role="alert">
                            <span>{text}</span>
                            <button class="dismiss" on:click=move |_| screen.update(|s| s.dismiss_notice())>
                                "×"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
