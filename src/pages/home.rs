//! Home page and the auth overlays that render on top of it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The overlay routes (`/login`, `/register`, `/forgot-password`,
//! `/reset-password`, `/resend-verification-email`, `/verify-email`,
//! `/callback`) all resolve to this page; each overlay component checks the
//! current path itself, so closing one is just a navigation back to `/`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate, use_query_map};

use crate::components::login_modal::LoginModal;
use crate::components::recovery::{
    ForgotPasswordModal, ResendVerificationModal, ResetPasswordModal, VerifyEmailModal,
};
use crate::components::register_modal::RegisterModal;
use crate::state::notify::NotifyState;
use crate::state::session::SessionState;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"SynFood"</h1>
                <p>"Fresh dishes, delivered from our kitchen to your door."</p>
                <a class="btn btn--primary" href="/menu">
                    "Browse the menu"
                </a>
            </section>

            <OauthCallback/>
            <LoginModal/>
            <RegisterModal/>
            <ForgotPasswordModal/>
            <ResetPasswordModal/>
            <ResendVerificationModal/>
            <VerifyEmailModal/>
        </div>
    }
}

/// `/callback?accessToken=`: lands here after the Google OAuth round trip.
///
/// Persists the token handed back by the server, validates it with a profile
/// fetch, and only then installs the user. Runs at most once per visit.
#[component]
fn OauthCallback() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let location = use_location();
    let navigate = use_navigate();
    let query = use_query_map();

    let started = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if location.pathname.get() != "/callback" || started.get() {
            return;
        }
        started.set(true);
        let Some(access_token) = query.with(|q| q.get("accessToken")) else {
            notify.update(|n| {
                n.push_error("Social login failed!", "The provider returned no token.");
            });
            return;
        };
        crate::util::token::save(&access_token);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_profile().await {
                Ok(user) => {
                    session.update(|s| s.login(user));
                    notify.update(|n| n.push_success("Login successful!"));
                }
                Err(err) => {
                    crate::util::token::clear();
                    notify.update(|n| n.push_error("Social login failed!", err.message));
                }
            }
            navigate("/", NavigateOptions::default());
        });
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, notify, &location, &navigate, &query, started);
    }

    view! { <></> }
}
