//! Shopping-cart state consulted by the checkout guard.
//!
//! DESIGN
//! ======
//! The cart is an external collaborator of the auth core: guards only ask it
//! one question. `eligible_for_checkout` is the single place the checkout
//! business rule lives, so the precondition can change without touching the
//! guard layer.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

/// One dish line in the cart.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Dish identifier (UUID string).
    pub dish_id: String,
    /// Display name at the time it was added.
    pub name: String,
    /// Unit price in the store currency.
    pub price: f64,
    /// Ordered quantity, always at least 1.
    pub quantity: u32,
}

/// Shared cart state for the storefront pages and the checkout guard.
#[derive(Clone, Debug, Default)]
pub struct CartState {
    pub items: Vec<CartItem>,
}

impl CartState {
    /// The checkout precondition: currently "at least one line in the cart".
    pub fn eligible_for_checkout(&self) -> bool {
        !self.items.is_empty()
    }

    /// Total number of units across all lines, for the header badge.
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Order total in the store currency.
    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.price * f64::from(i.quantity))
            .sum()
    }
}
