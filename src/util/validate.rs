//! Client-side form validation for the auth forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validation failures surface inline on the form and must be caught before
//! any network call is made. The password policy mirrors the server's rule:
//! 6 to 64 alphanumeric characters containing at least one letter and one
//! digit.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Check a new password against the account password policy.
///
/// # Errors
///
/// Returns an inline-displayable message describing the first violated rule.
pub fn check_password_policy(password: &str) -> Result<(), String> {
    let len = password.chars().count();
    if !(6..=64).contains(&len) {
        return Err("Password must be between 6 and 64 characters long!".to_owned());
    }
    if !password.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err("Password may only contain letters and numbers!".to_owned());
    }
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !has_letter || !has_digit {
        return Err("Password must contain both letters and numbers!".to_owned());
    }
    Ok(())
}

/// Validate the change-password form: policy on the new password plus an
/// exact confirm match.
///
/// # Errors
///
/// Returns the inline message for the first failing rule.
pub fn check_new_password(new_password: &str, confirm_password: &str) -> Result<(), String> {
    check_password_policy(new_password)?;
    if new_password != confirm_password {
        return Err("Passwords do not match!".to_owned());
    }
    Ok(())
}

/// Require a non-empty trimmed value for `label`, returning the trimmed value.
///
/// # Errors
///
/// Returns an inline "Please input your ..." message when the field is empty.
pub fn require(label: &str, value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("Please input your {label}!"));
    }
    Ok(trimmed.to_owned())
}
