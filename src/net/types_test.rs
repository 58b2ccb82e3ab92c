use super::*;

// =============================================================
// Role parsing
// =============================================================

#[test]
fn role_parses_screaming_snake_case() {
    let role: Role = serde_json::from_str("\"ADMIN\"").unwrap();
    assert_eq!(role, Role::Admin);
}

#[test]
fn role_unknown_value_falls_back_to_guest() {
    let role: Role = serde_json::from_str("\"SUPERVISOR\"").unwrap();
    assert_eq!(role, Role::Guest);
}

#[test]
fn role_staff_and_admin_are_staff() {
    assert!(Role::Staff.is_staff());
    assert!(Role::Admin.is_staff());
}

#[test]
fn role_customer_and_guest_are_not_staff() {
    assert!(!Role::Customer.is_staff());
    assert!(!Role::Guest.is_staff());
}

// =============================================================
// Profile payload
// =============================================================

#[test]
fn user_parses_camel_case_profile() {
    let user: User = serde_json::from_str(
        r#"{
            "id": "u1",
            "email": "ana@example.com",
            "fullName": "Ana",
            "avatar": null,
            "role": "CUSTOMER"
        }"#,
    )
    .unwrap();
    assert_eq!(user.full_name, "Ana");
    assert_eq!(user.role, Role::Customer);
}

#[test]
fn user_missing_role_defaults_to_guest() {
    let user: User = serde_json::from_str(
        r#"{"id": "u1", "email": "ana@example.com", "fullName": "Ana"}"#,
    )
    .unwrap();
    assert_eq!(user.role, Role::Guest);
}

#[test]
fn sign_in_response_reads_access_token() {
    let resp: SignInResponse = serde_json::from_str(r#"{"accessToken": "tok-1"}"#).unwrap();
    assert_eq!(resp.access_token, "tok-1");
}

// =============================================================
// Dish payload
// =============================================================

#[test]
fn dish_parses_server_payload_shape() {
    // Shape as served by get-all-dishes / get-dish-by-id, including fields
    // the client does not model.
    let dish: Dish = serde_json::from_str(
        r#"{
            "dishId": "d1",
            "dishName": "Pho Bo",
            "description": "Beef noodle soup",
            "status": "ACTIVE",
            "thumbImage": "https://cdn.example.com/pho.jpg",
            "offerPrice": 8.5,
            "price": 9.5,
            "categoryId": "c1",
            "categoryName": "Noodles"
        }"#,
    )
    .unwrap();
    assert_eq!(dish.dish_id, "d1");
    assert_eq!(dish.dish_name, "Pho Bo");
    assert_eq!(dish.offer_price, Some(8.5));
    assert_eq!(dish.thumb_image.as_deref(), Some("https://cdn.example.com/pho.jpg"));
}

#[test]
fn dish_without_offer_or_thumb_still_parses() {
    let dish: Dish =
        serde_json::from_str(r#"{"dishId": "d2", "dishName": "Goi Cuon", "price": 5.0}"#).unwrap();
    assert_eq!(dish.offer_price, None);
    assert!(dish.thumb_image.is_none());
}
