//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `cart`, `notify`) so individual
//! components can depend on small focused models. Each is provided as an
//! `RwSignal` context from `app::App`.

pub mod cart;
pub mod notify;
pub mod session;
