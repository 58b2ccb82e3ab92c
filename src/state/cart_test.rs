use super::*;

fn line(quantity: u32, price: f64) -> CartItem {
    CartItem {
        dish_id: "d1".to_owned(),
        name: "Pho".to_owned(),
        price,
        quantity,
    }
}

#[test]
fn empty_cart_is_not_checkout_eligible() {
    assert!(!CartState::default().eligible_for_checkout());
}

#[test]
fn cart_with_items_is_checkout_eligible() {
    let cart = CartState { items: vec![line(1, 9.5)] };
    assert!(cart.eligible_for_checkout());
}

#[test]
fn unit_count_sums_quantities() {
    let cart = CartState {
        items: vec![line(2, 9.5), line(3, 4.0)],
    };
    assert_eq!(cart.unit_count(), 5);
}

#[test]
fn total_sums_price_times_quantity() {
    let cart = CartState {
        items: vec![line(2, 9.5), line(1, 4.0)],
    };
    assert!((cart.total() - 23.0).abs() < f64::EPSILON);
}
