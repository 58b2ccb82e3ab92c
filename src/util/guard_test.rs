use super::*;
use crate::net::types::{Role, User};

fn anonymous_loading() -> SessionState {
    SessionState::default()
}

fn anonymous() -> SessionState {
    let mut state = SessionState::default();
    state.finish_hydration(None);
    state
}

fn signed_in(role: Role) -> SessionState {
    let mut state = SessionState::default();
    state.login(User {
        id: "u1".to_owned(),
        email: "ana@example.com".to_owned(),
        full_name: "Ana".to_owned(),
        avatar: None,
        role,
    });
    state
}

// =============================================================
// Loading session: no guard ever redirects
// =============================================================

#[test]
fn all_guards_hold_while_session_is_loading() {
    let state = anonymous_loading();
    assert_eq!(decide_customer(&state), GuardDecision::Pending);
    assert_eq!(decide_admin(&state), GuardDecision::Pending);
    assert_eq!(decide_checkout(&state, true), GuardDecision::Pending);
    assert_eq!(decide_checkout(&state, false), GuardDecision::Pending);
}

// =============================================================
// Anonymous
// =============================================================

#[test]
fn anonymous_customer_guard_redirects_to_login() {
    assert_eq!(decide_customer(&anonymous()), GuardDecision::Redirect("/login"));
}

#[test]
fn anonymous_admin_guard_redirects_to_login() {
    assert_eq!(decide_admin(&anonymous()), GuardDecision::Redirect("/login"));
}

#[test]
fn anonymous_checkout_guard_redirects_to_login_even_with_cart() {
    assert_eq!(
        decide_checkout(&anonymous(), true),
        GuardDecision::Redirect("/login")
    );
}

// =============================================================
// Authenticated customer
// =============================================================

#[test]
fn customer_passes_generic_guard() {
    assert_eq!(decide_customer(&signed_in(Role::Customer)), GuardDecision::Allow);
}

#[test]
fn customer_fails_admin_guard_toward_home() {
    assert_eq!(
        decide_admin(&signed_in(Role::Customer)),
        GuardDecision::Redirect("/")
    );
}

#[test]
fn customer_with_cart_passes_checkout_guard() {
    assert_eq!(
        decide_checkout(&signed_in(Role::Customer), true),
        GuardDecision::Allow
    );
}

#[test]
fn customer_with_empty_cart_is_sent_to_cart_page() {
    assert_eq!(
        decide_checkout(&signed_in(Role::Customer), false),
        GuardDecision::Redirect("/cart")
    );
}

// =============================================================
// Staff / admin
// =============================================================

#[test]
fn admin_passes_all_guards() {
    let state = signed_in(Role::Admin);
    assert_eq!(decide_customer(&state), GuardDecision::Allow);
    assert_eq!(decide_admin(&state), GuardDecision::Allow);
    assert_eq!(decide_checkout(&state, true), GuardDecision::Allow);
}

#[test]
fn staff_passes_admin_guard() {
    assert_eq!(decide_admin(&signed_in(Role::Staff)), GuardDecision::Allow);
}
