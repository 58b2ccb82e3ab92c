//! Google OAuth trigger.
//!
//! Clicking hands the whole browser tab to the provider, so the spinner is a
//! fixed-duration affordance rather than a response-driven state: if the
//! navigation stalls the button recovers after two seconds.

use leptos::prelude::*;

use crate::net::api;

#[component]
pub fn SocialLogin() -> impl IntoView {
    let busy = RwSignal::new(false);

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                // No-op if the tab already left or the modal unmounted.
                busy.try_set(false);
            });
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&api::oauth_google_url());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        busy.set(false);
    };

    view! {
        <ul class="social-login">
            <li>
                <a href=api::oauth_google_url() class="social-login__google" on:click=on_click>
                    {move || if busy.get() { "Redirecting..." } else { "Sign in with Google" }}
                </a>
            </li>
        </ul>
    }
}
