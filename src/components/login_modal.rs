//! Login overlay shown on top of the home page at `/login`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only component that turns credentials into an authenticated session:
//! sign-in yields a token, the token is persisted so the profile fetch can
//! attach it, and only a successful profile fetch installs the user. A
//! failure at either step rolls the token back and leaves the session
//! untouched.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::social_login::SocialLogin;
use crate::state::notify::NotifyState;
use crate::state::session::SessionState;
use crate::util::validate;

#[component]
pub fn LoginModal() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let location = use_location();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let is_open = move || location.pathname.get() == "/login";

    let navigate_close = navigate.clone();
    let on_close = move |_| {
        navigate_close("/", NavigateOptions::default());
    };

    let navigate_submit = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let email_value = match validate::require("email", &email.get()) {
            Ok(v) => v,
            Err(msg) => {
                form_error.set(Some(msg));
                return;
            }
        };
        let password_value = match validate::require("password", &password.get()) {
            Ok(v) => v,
            Err(msg) => {
                form_error.set(Some(msg));
                return;
            }
        };
        form_error.set(None);
        submitting.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_submit.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_in(&email_value, &password_value).await {
                    Ok(signed) => {
                        // The profile fetch needs the bearer token in place.
                        crate::util::token::save(&signed.access_token);
                        match crate::net::api::fetch_profile().await {
                            Ok(user) => {
                                session.update(|s| s.login(user));
                                notify.update(|n| n.push_success("Login successful!"));
                                navigate("/", NavigateOptions::default());
                            }
                            Err(err) => {
                                // Roll the token back; the session was never
                                // populated, so nothing else to undo.
                                crate::util::token::clear();
                                notify.update(|n| n.push_error("Login failed!", err.message));
                            }
                        }
                    }
                    Err(err) => {
                        notify.update(|n| n.push_error("Login failed!", err.message));
                    }
                }
                // The modal may already be unmounted after navigation.
                submitting.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate_submit, email_value, password_value);
            submitting.set(false);
        }
    };

    view! {
        <Show when=is_open>
            <div class="modal-backdrop" on:click=on_close.clone()>
                <section class="modal auth-modal" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Welcome back!"</h2>
                    <p>"Sign In to continue"</p>
                    <form class="auth-form" on:submit=on_submit.clone()>
                        <label class="auth-form__label">
                            "Email"
                            <input
                                class="auth-form__input"
                                type="email"
                                placeholder="Email"
                                autocomplete="email"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="auth-form__label">
                            "Password"
                            <input
                                class="auth-form__input"
                                type="password"
                                placeholder="Password"
                                autocomplete="current-password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>
                        <Show when=move || form_error.get().is_some()>
                            <p class="auth-form__error">{move || form_error.get().unwrap_or_default()}</p>
                        </Show>
                        <a class="auth-form__link" href="/forgot-password">
                            "Forgot Password?"
                        </a>
                        <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Signing in..." } else { "Login" }}
                        </button>
                    </form>
                    <p class="auth-modal__or"><span>"or"</span></p>
                    <SocialLogin/>
                    <p class="auth-modal__alt">
                        "Don't have an account? " <a href="/register">"Register"</a>
                    </p>
                </section>
            </div>
        </Show>
    }
}
