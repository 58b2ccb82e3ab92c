//! Route-guard decisions for protected storefront and admin routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route evaluates one of these pure functions against the
//! current session snapshot on each navigation attempt. Guards never mutate
//! the session; transitions come only from `state::session` operations.
//!
//! While the session is still hydrating the outcome is `Pending`: the
//! absence of a user is ambiguous between "not logged in" and "not checked
//! yet", so redirect decisions are deferred instead of flashing a redirect.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Outcome of evaluating a guard against a session snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still hydrating; render a neutral placeholder, no redirect.
    Pending,
    /// The requested view may render.
    Allow,
    /// Navigate to the given path instead of rendering.
    Redirect(&'static str),
}

/// Generic authenticated guard: any logged-in user passes.
pub fn decide_customer(session: &SessionState) -> GuardDecision {
    if session.loading {
        return GuardDecision::Pending;
    }
    if session.is_authenticated() {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect("/login")
    }
}

/// Admin-area guard: requires an authenticated staff/admin role.
///
/// Anonymous visitors go to the login overlay; authenticated customers are
/// sent home rather than shown the admin chrome.
pub fn decide_admin(session: &SessionState) -> GuardDecision {
    if session.loading {
        return GuardDecision::Pending;
    }
    if !session.is_authenticated() {
        return GuardDecision::Redirect("/login");
    }
    if session.is_admin() {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect("/")
    }
}

/// Checkout/payment guard: authenticated and checkout-eligible.
///
/// `checkout_eligible` is computed by the cart collaborator
/// (`CartState::eligible_for_checkout`); when only that precondition fails
/// the user lands on the cart page to fix it.
pub fn decide_checkout(session: &SessionState, checkout_eligible: bool) -> GuardDecision {
    if session.loading {
        return GuardDecision::Pending;
    }
    if !session.is_authenticated() {
        return GuardDecision::Redirect("/login");
    }
    if checkout_eligible {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect("/cart")
    }
}

/// Re-run a guard whenever the session changes and navigate on `Redirect`.
///
/// `Pending` and `Allow` never navigate; the effect fires again once the
/// session leaves the loading state, so no redirect is flashed mid-bootstrap.
pub fn install_guard_redirect<D, F>(decide: D, navigate: F)
where
    D: Fn() -> GuardDecision + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardDecision::Redirect(target) = decide() {
            navigate(target, NavigateOptions::default());
        }
    });
}
