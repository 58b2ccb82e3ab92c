//! Reusable UI components shared by the page layer.
//!
//! ARCHITECTURE
//! ============
//! `protected` wraps routes in guard decisions, `toast` renders the
//! notification queue, and the remaining modules are the auth overlays and
//! triggers mounted by the public pages.

pub mod login_modal;
pub mod protected;
pub mod recovery;
pub mod register_modal;
pub mod social_login;
pub mod toast;
