use super::*;

// =============================================================
// Endpoint formatting
// =============================================================

#[test]
fn forgot_password_endpoint_formats_query() {
    assert_eq!(
        forgot_password_endpoint("a@b.c"),
        "/api/v1/auth/forgot-password?email=a@b.c"
    );
}

#[test]
fn resend_verification_endpoint_formats_query() {
    assert_eq!(
        resend_verification_endpoint("a@b.c"),
        "/api/v1/auth/resend-verification-email?email=a@b.c"
    );
}

#[test]
fn verify_email_endpoint_formats_token() {
    assert_eq!(verify_email_endpoint("tok-1"), "/api/v1/auth/verify-email?token=tok-1");
}

#[test]
fn dish_detail_endpoint_formats_id() {
    assert_eq!(dish_detail_endpoint("d1"), "/api/v1/auth/guest/get-dish-by-id/d1");
}

#[test]
fn oauth_url_points_at_google_redirect() {
    assert_eq!(oauth_google_url(), "/api/v1/auth/google");
}

// =============================================================
// Failure payload parsing
// =============================================================

#[test]
fn failure_prefers_nested_errors_error() {
    let err = failure_from_body(
        400,
        r#"{"errors": {"error": "Email already in use"}, "message": "Bad Request"}"#,
    );
    assert_eq!(err.message, "Email already in use");
    assert_eq!(err.status, 400);
}

#[test]
fn failure_falls_back_to_message_field() {
    let err = failure_from_body(401, r#"{"message": "Token expired"}"#);
    assert_eq!(err.message, "Token expired");
    assert!(err.is_unauthorized());
}

#[test]
fn failure_uses_generic_message_for_empty_body() {
    let err = failure_from_body(500, "");
    assert_eq!(err.message, "Something went wrong!");
}

#[test]
fn failure_uses_generic_message_for_non_json_body() {
    let err = failure_from_body(502, "<html>bad gateway</html>");
    assert_eq!(err.message, "Something went wrong!");
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn only_401_is_unauthorized() {
    assert!(ApiError::status_only(401).is_unauthorized());
    assert!(!ApiError::status_only(403).is_unauthorized());
    assert!(!ApiError::network("down".to_owned()).is_unauthorized());
}

#[test]
fn display_includes_message_and_status() {
    let err = ApiError::status_only(500);
    assert_eq!(err.to_string(), "Something went wrong! (status 500)");
}
