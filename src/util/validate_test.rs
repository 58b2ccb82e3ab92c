use super::*;

// =============================================================
// Password policy
// =============================================================

#[test]
fn policy_accepts_minimum_alphanumeric_password() {
    assert!(check_password_policy("abc123").is_ok());
}

#[test]
fn policy_rejects_short_password() {
    assert!(check_password_policy("ab1").is_err());
}

#[test]
fn policy_rejects_overlong_password() {
    let long = "a1".repeat(33);
    assert!(check_password_policy(&long).is_err());
}

#[test]
fn policy_rejects_symbols() {
    assert!(check_password_policy("abc123!").is_err());
}

#[test]
fn policy_rejects_digits_only() {
    assert!(check_password_policy("123456").is_err());
}

#[test]
fn policy_rejects_letters_only() {
    assert!(check_password_policy("abcdef").is_err());
}

// =============================================================
// Change-password form validation
// =============================================================

#[test]
fn mismatched_confirm_is_rejected_before_network() {
    let err = check_new_password("abc123", "abc124").unwrap_err();
    assert_eq!(err, "Passwords do not match!");
}

#[test]
fn matching_confirm_passes() {
    assert!(check_new_password("abc123", "abc123").is_ok());
}

// =============================================================
// Required fields
// =============================================================

#[test]
fn require_rejects_blank_input() {
    let err = require("email", "   ").unwrap_err();
    assert_eq!(err, "Please input your email!");
}

#[test]
fn require_trims_accepted_input() {
    assert_eq!(require("email", " a@b.c ").unwrap(), "a@b.c");
}
