//! Cart, checkout, and payment pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/cart` sits behind the generic authenticated guard; checkout and the
//! payment screens sit behind the checkout guard, which additionally requires
//! the cart precondition. The payment pages themselves are thin: gateway
//! details live server-side.

use leptos::prelude::*;

use crate::state::cart::CartState;

#[component]
pub fn CartPage() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();

    view! {
        <div class="cart-page">
            <h1>"Your cart"</h1>
            <Show
                when=move || cart.get().eligible_for_checkout()
                fallback=move || view! { <p>"Your cart is empty. " <a href="/menu">"Find a dish"</a></p> }
            >
                <ul class="cart-page__lines">
                    {move || {
                        cart.get()
                            .items
                            .into_iter()
                            .map(|line| {
                                view! {
                                    <li class="cart-line">
                                        <span>{line.name}</span>
                                        <span>{format!("x{}", line.quantity)}</span>
                                        <span>{format!("${:.2}", line.price * f64::from(line.quantity))}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
                <p class="cart-page__total">{move || format!("Total: ${:.2}", cart.get().total())}</p>
                <a class="btn btn--primary" href="/checkout">
                    "Checkout"
                </a>
            </Show>
        </div>
    }
}

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();

    view! {
        <div class="checkout-page">
            <h1>"Checkout"</h1>
            <p>{move || format!("{} items · ${:.2}", cart.get().unit_count(), cart.get().total())}</p>
            <a class="btn btn--primary" href="/payment">
                "Continue to payment"
            </a>
        </div>
    }
}

#[component]
pub fn PaymentPage() -> impl IntoView {
    view! {
        <div class="payment-page">
            <h1>"Payment"</h1>
            <p>"Choose a payment method to place your order."</p>
        </div>
    }
}

#[component]
pub fn StatusPaymentPage() -> impl IntoView {
    view! {
        <div class="payment-status-page">
            <h1>"Payment status"</h1>
        </div>
    }
}

#[component]
pub fn PaymentReturnPage() -> impl IntoView {
    view! {
        <div class="payment-return-page">
            <h1>"Payment result"</h1>
            <p>"Thanks! We are confirming your payment with the gateway."</p>
        </div>
    }
}
