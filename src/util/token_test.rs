use super::*;

// Off-browser the slot is always empty and writes are no-ops; these tests pin
// the non-hydrate stubs the session layer relies on during native tests.

#[test]
fn load_returns_none_without_browser_storage() {
    assert!(load().is_none());
}

#[test]
fn save_and_clear_are_noops_without_browser_storage() {
    save("tok-1");
    assert!(!is_present());
    clear();
    assert!(!is_present());
}
