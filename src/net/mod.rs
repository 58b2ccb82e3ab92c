//! Networking modules for the REST API boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls and owns bearer-token attachment; `types`
//! defines the wire schema shared with the server.

pub mod api;
pub mod types;
