use super::*;

#[test]
fn push_error_keeps_title_and_detail() {
    let mut state = NotifyState::default();
    state.push_error("Login failed!", "Bad credentials");
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].kind, ToastKind::Error);
    assert_eq!(state.toasts[0].detail.as_deref(), Some("Bad credentials"));
}

#[test]
fn push_success_has_no_detail() {
    let mut state = NotifyState::default();
    state.push_success("Login successful!");
    assert_eq!(state.toasts[0].kind, ToastKind::Success);
    assert!(state.toasts[0].detail.is_none());
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = NotifyState::default();
    state.push_success("one");
    state.push_success("two");
    let first = state.toasts[0].id.clone();
    state.dismiss(&first);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].title, "two");
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = NotifyState::default();
    state.push_success("one");
    state.dismiss("nope");
    assert_eq!(state.toasts.len(), 1);
}
