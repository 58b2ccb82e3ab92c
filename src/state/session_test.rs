use super::*;
use crate::net::types::{Role, User};

fn customer() -> User {
    User {
        id: "u1".to_owned(),
        email: "ana@example.com".to_owned(),
        full_name: "Ana".to_owned(),
        avatar: None,
        role: Role::Customer,
    }
}

fn admin() -> User {
    User {
        role: Role::Admin,
        ..customer()
    }
}

// =============================================================
// Defaults and derived flags
// =============================================================

#[test]
fn default_session_has_no_user() {
    let state = SessionState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn default_session_is_loading() {
    assert!(SessionState::default().loading);
}

#[test]
fn authenticated_iff_user_present() {
    let mut state = SessionState::default();
    state.login(customer());
    assert!(state.is_authenticated());
    state.clear_user();
    assert!(!state.is_authenticated());
}

#[test]
fn customer_is_not_admin() {
    let mut state = SessionState::default();
    state.login(customer());
    assert!(!state.is_admin());
}

#[test]
fn staff_role_is_admin() {
    let mut state = SessionState::default();
    state.login(admin());
    assert!(state.is_admin());
}

// =============================================================
// Login / logout transitions
// =============================================================

#[test]
fn login_ends_loading() {
    let mut state = SessionState::default();
    state.login(customer());
    assert!(!state.loading);
    assert_eq!(state.user_id().as_deref(), Some("u1"));
}

#[test]
fn logout_clears_user_even_without_server() {
    // Off-browser the server logout stub always fails; local state must
    // clear regardless.
    let session = RwSignal::new(SessionState::default());
    session.update(|s| s.login(customer()));
    logout(session);
    assert!(session.get_untracked().user.is_none());
}

// =============================================================
// Hydration dedup
// =============================================================

#[test]
fn begin_hydration_first_call_wins() {
    let mut state = SessionState::default();
    assert!(state.begin_hydration());
    assert!(!state.begin_hydration());
    assert!(!state.begin_hydration());
}

#[test]
fn hydrate_without_token_completes_synchronously() {
    let session = RwSignal::new(SessionState::default());
    hydrate(session);
    let state = session.get_untracked();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn duplicate_hydrate_calls_are_noops() {
    let session = RwSignal::new(SessionState::default());
    hydrate(session);
    session.update(|s| s.login(customer()));
    // A later duplicate must not disturb the settled session.
    hydrate(session);
    assert!(session.get_untracked().is_authenticated());
}

#[test]
fn finish_hydration_installs_user_and_ends_loading() {
    let mut state = SessionState::default();
    assert!(state.begin_hydration());
    state.finish_hydration(Some(customer()));
    assert!(state.is_authenticated());
    assert!(!state.loading);
}

// =============================================================
// Global expired-credential contract
// =============================================================

#[test]
fn unauthorized_failure_clears_user() {
    let session = RwSignal::new(SessionState::default());
    session.update(|s| s.login(customer()));
    note_auth_failure(session, &ApiError::status_only(401));
    assert!(session.get_untracked().user.is_none());
}

#[test]
fn forbidden_failure_keeps_user() {
    let session = RwSignal::new(SessionState::default());
    session.update(|s| s.login(customer()));
    note_auth_failure(session, &ApiError::status_only(403));
    assert!(session.get_untracked().is_authenticated());
}

#[test]
fn server_error_keeps_user() {
    let session = RwSignal::new(SessionState::default());
    session.update(|s| s.login(customer()));
    note_auth_failure(session, &ApiError::status_only(500));
    assert!(session.get_untracked().is_authenticated());
}
