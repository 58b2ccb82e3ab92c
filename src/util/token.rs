//! Durable access-token slot backed by browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module is the only reader/writer of the persisted bearer credential.
//! `net::api` consults it when attaching `Authorization` headers and clears it
//! on expired-token responses; `state::session` clears it on logout. Holding a
//! token does not imply it is still valid; the session layer trusts it only
//! after a successful profile fetch.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; non-hydrate paths no-op
//! so native unit tests and server rendering stay deterministic.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "accessToken";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the stored access token, if any.
pub fn load() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a new access token, replacing any previous one.
pub fn save(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(STORAGE_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Erase the stored access token.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}

/// Whether a token is currently stored (it may still be expired server-side).
pub fn is_present() -> bool {
    load().is_some()
}
