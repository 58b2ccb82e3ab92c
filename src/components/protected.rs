//! Guard wrapper components for protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each wrapper evaluates its pure guard against the session context and only
//! renders children on `Allow`, so a denied page's effects and requests never
//! execute. While the session is hydrating a neutral placeholder renders and
//! no redirect fires; the redirect effect re-evaluates once hydration ends.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::cart::CartState;
use crate::state::session::SessionState;
use crate::util::guard::{self, GuardDecision};

/// Generic authenticated guard: any logged-in user may view the children.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let decision = Signal::derive(move || guard::decide_customer(&session.get()));
    guarded(decision, children)
}

/// Admin-area guard: requires a staff/admin role.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let decision = Signal::derive(move || guard::decide_admin(&session.get()));
    guarded(decision, children)
}

/// Checkout/payment guard: authenticated plus the cart precondition.
#[component]
pub fn RequireCheckout(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let cart = expect_context::<RwSignal<CartState>>();
    let decision = Signal::derive(move || {
        guard::decide_checkout(&session.get(), cart.get().eligible_for_checkout())
    });
    guarded(decision, children)
}

fn guarded(decision: Signal<GuardDecision>, children: ChildrenFn) -> impl IntoView {
    let navigate = use_navigate();
    guard::install_guard_redirect(move || decision.get(), navigate);

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Allow
            fallback=move || {
                view! {
                    <div class="route-guard">
                        <p>
                            {move || match decision.get() {
                                GuardDecision::Pending => "Loading...",
                                _ => "Redirecting...",
                            }}
                        </p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
