//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared rendering
//! to `components`. Auth overlays mount inside the home page so `/login` and
//! friends render on top of the storefront instead of replacing it.

pub mod account;
pub mod admin;
pub mod cart;
pub mod home;
pub mod storefront;
