//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The single writer of who is logged in. Route guards and user-aware
//! components read snapshots of this state; auth forms and the startup
//! bootstrap mutate it through the operations below. The persisted token
//! lives separately in `util::token` and is only trusted after a successful
//! profile fetch.
//!
//! LIFECYCLE
//! =========
//! Starts empty with `loading = true`. `hydrate` resolves the stored token
//! (if any) into a validated user exactly once per application start; login
//! forms install an already-fetched profile; `logout` and expired-token
//! responses clear everything. While `loading` is true the absence of a user
//! is ambiguous, so guards hold navigation instead of redirecting.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::net::types::User;
use crate::util::token;

/// Authentication state tracking the current user and bootstrap status.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    /// The validated user, absent while anonymous or still loading.
    pub user: Option<User>,
    /// True until the startup hydration attempt has completed.
    pub loading: bool,
    /// Whether a hydration attempt has already been claimed.
    hydrate_started: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            hydrate_started: false,
        }
    }
}

impl SessionState {
    /// True exactly when a validated user is present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// True when the current user may enter the admin area.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role.is_staff())
    }

    /// Identifier of the current user, if authenticated.
    pub fn user_id(&self) -> Option<String> {
        self.user.as_ref().map(|u| u.id.clone())
    }

    /// Install an already-fetched profile (the form did the network work).
    pub fn login(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
    }

    /// Drop the current user. Token clearing is the caller's responsibility
    /// so this stays a pure transition.
    pub fn clear_user(&mut self) {
        self.user = None;
    }

    /// Claim the one allowed hydration attempt.
    ///
    /// Returns `false` when hydration already ran or is in flight; duplicate
    /// callers must treat that as "nothing to do". First caller wins; the
    /// WASM event loop is single-threaded, so check-and-set cannot race.
    pub fn begin_hydration(&mut self) -> bool {
        if self.hydrate_started {
            return false;
        }
        self.hydrate_started = true;
        true
    }

    /// Record the hydration outcome and end the bootstrap phase.
    pub fn finish_hydration(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }
}

/// Resolve the stored token into a validated session, at most once.
///
/// With no token present this completes synchronously with no network call.
/// Otherwise one profile fetch runs; on success the user is installed, on any
/// failure (expired token included) the token is erased and the session stays
/// anonymous. `loading` is cleared on every path. Duplicate calls from
/// re-renders or re-mounts are no-ops: only the first call's result is ever
/// applied.
pub fn hydrate(session: RwSignal<SessionState>) {
    let claimed = session
        .try_update(SessionState::begin_hydration)
        .unwrap_or(false);
    if !claimed {
        return;
    }

    if token::load().is_none() {
        session.update(|s| s.finish_hydration(None));
        return;
    }

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_profile().await {
            Ok(user) => session.update(|s| s.finish_hydration(Some(user))),
            Err(err) => {
                log::warn!("session hydration failed: {err}");
                token::clear();
                session.update(|s| s.finish_hydration(None));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    session.update(|s| s.finish_hydration(None));
}

/// Log out locally and notify the server best-effort.
///
/// Local state and the stored token are cleared unconditionally before the
/// server call; a failed or timed-out server logout never blocks the client
/// from forgetting the session.
pub fn logout(session: RwSignal<SessionState>) {
    token::clear();
    session.update(SessionState::clear_user);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async {
        if let Err(err) = crate::net::api::logout().await {
            log::warn!("server-side logout failed: {err}");
        }
    });
}

/// Apply the global expired-credential contract after a failed API call.
///
/// Any 401-class failure from any authenticated operation clears both the
/// token and the in-memory user, whichever operation triggered it. Other
/// failures (403, 5xx, network) leave the session untouched.
pub fn note_auth_failure(session: RwSignal<SessionState>, err: &ApiError) {
    if err.is_unauthorized() {
        token::clear();
        session.update(SessionState::clear_user);
    }
}
