//! Account-recovery overlays: forgot/reset password and email verification.
//!
//! SYSTEM CONTEXT
//! ==============
//! These are thin forms over unauthenticated auth endpoints; none of them
//! touch the session. Each renders as an overlay on the home page for its
//! route, matching the storefront modal pattern used by login/register.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate, use_query_map};

use crate::state::notify::NotifyState;
use crate::util::validate;

/// `/forgot-password`: request a reset email.
#[component]
pub fn ForgotPasswordModal() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();
    let location = use_location();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let is_open = move || location.pathname.get() == "/forgot-password";

    let navigate_close = navigate.clone();
    let on_close = move |_| navigate_close("/", NavigateOptions::default());

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
        form_error.set(None);
        submitting.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::forgot_password(&email_value).await {
                Ok(ack) => {
                    let detail = ack
                        .message
                        .unwrap_or_else(|| "Check your inbox for the reset link.".to_owned());
                    notify.update(|n| n.push_success(format!("Reset email sent! {detail}")));
                }
                Err(err) => {
                    notify.update(|n| n.push_error("Could not send reset email!", err.message));
                }
            }
            submitting.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email_value;
            submitting.set(false);
        }
    };

    view! {
        <Show when=is_open>
            <div class="modal-backdrop" on:click=on_close.clone()>
                <section class="modal auth-modal" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Forgot password"</h2>
                    <p>"We will email you a reset link."</p>
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
                        <Show when=move || form_error.get().is_some()>
                            <p class="auth-form__error">{move || form_error.get().unwrap_or_default()}</p>
                        </Show>
                        <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Sending..." } else { "Send reset link" }}
                        </button>
                    </form>
                </section>
            </div>
        </Show>
    }
}

/// `/reset-password?token=`: choose a new password from an emailed token.
#[component]
pub fn ResetPasswordModal() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();
    let location = use_location();
    let navigate = use_navigate();
    let query = use_query_map();

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let is_open = move || location.pathname.get() == "/reset-password";

    let navigate_close = navigate.clone();
    let on_close = move |_| navigate_close("/", NavigateOptions::default());

    let navigate_submit = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let Some(reset_token) = query.with(|q| q.get("token")) else {
            form_error.set(Some("The reset link is missing its token.".to_owned()));
            return;
        };
        if let Err(msg) = validate::check_new_password(&password.get(), &confirm.get()) {
            form_error.set(Some(msg));
            return;
        }
        form_error.set(None);
        submitting.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_submit.clone();
            let password_value = password.get();
            leptos::task::spawn_local(async move {
                match crate::net::api::reset_password(&reset_token, &password_value).await {
                    Ok(_) => {
                        notify.update(|n| n.push_success("Password reset! Please sign in."));
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(err) => {
                        notify.update(|n| n.push_error("Password reset failed!", err.message));
                    }
                }
                submitting.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate_submit, reset_token);
            submitting.set(false);
        }
    };

    view! {
        <Show when=is_open>
            <div class="modal-backdrop" on:click=on_close.clone()>
                <section class="modal auth-modal" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Reset password"</h2>
                    <form class="auth-form" on:submit=on_submit.clone()>
                        <label class="auth-form__label">
                            "New Password"
                            <input
                                class="auth-form__input"
                                type="password"
                                placeholder="New Password"
                                autocomplete="new-password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="auth-form__label">
                            "Confirm Password"
                            <input
                                class="auth-form__input"
                                type="password"
                                placeholder="Confirm Password"
                                autocomplete="new-password"
                                prop:value=move || confirm.get()
                                on:input=move |ev| confirm.set(event_target_value(&ev))
                            />
                        </label>
                        <Show when=move || form_error.get().is_some()>
                            <p class="auth-form__error">{move || form_error.get().unwrap_or_default()}</p>
                        </Show>
                        <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Resetting..." } else { "Reset password" }}
                        </button>
                    </form>
                </section>
            </div>
        </Show>
    }
}

/// `/resend-verification-email`: ask for a fresh verification email.
#[component]
pub fn ResendVerificationModal() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();
    let location = use_location();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let is_open = move || location.pathname.get() == "/resend-verification-email";

    let navigate_close = navigate.clone();
    let on_close = move |_| navigate_close("/", NavigateOptions::default());

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
        form_error.set(None);
        submitting.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::resend_verification(&email_value).await {
                Ok(_) => notify.update(|n| n.push_success("Verification email sent!")),
                Err(err) => {
                    notify.update(|n| n.push_error("Could not resend verification!", err.message));
                }
            }
            submitting.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email_value;
            submitting.set(false);
        }
    };

    view! {
        <Show when=is_open>
            <div class="modal-backdrop" on:click=on_close.clone()>
                <section class="modal auth-modal" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Resend verification email"</h2>
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
                        <Show when=move || form_error.get().is_some()>
                            <p class="auth-form__error">{move || form_error.get().unwrap_or_default()}</p>
                        </Show>
                        <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Sending..." } else { "Resend" }}
                        </button>
                    </form>
                </section>
            </div>
        </Show>
    }
}

/// `/verify-email?token=`: confirms the emailed token once on open.
///
/// The verification fires exactly once per visit; a result that arrives after
/// the user navigates away is dropped via the alive flag.
#[component]
pub fn VerifyEmailModal() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();
    let query = use_query_map();

    let outcome = RwSignal::new(None::<Result<(), String>>);
    let started = RwSignal::new(false);

    let is_open = move || location.pathname.get() == "/verify-email";

    let navigate_close = navigate.clone();
    let on_close = move |_| navigate_close("/", NavigateOptions::default());

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        Effect::new(move || {
            if !is_open() || started.get() {
                return;
            }
            started.set(true);
            let Some(verify_token) = query.with(|q| q.get("token")) else {
                outcome.set(Some(Err("The verification link is missing its token.".to_owned())));
                return;
            };
            let alive = alive_task.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::verify_email(&verify_token)
                    .await
                    .map(|_| ())
                    .map_err(|err| err.message);
                if alive.load(std::sync::atomic::Ordering::Relaxed) {
                    outcome.try_set(Some(result));
                }
            });
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (&query, started);
    }

    view! {
        <Show when=is_open>
            <div class="modal-backdrop" on:click=on_close.clone()>
                <section class="modal auth-modal" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Email verification"</h2>
                    {move || match outcome.get() {
                        None => view! { <p>"Verifying your email..."</p> }.into_any(),
                        Some(Ok(())) => view! {
                            <p>"Your email is verified. " <a href="/login">"Sign in"</a></p>
                        }
                        .into_any(),
                        Some(Err(msg)) => view! { <p class="auth-form__error">{msg}</p> }.into_any(),
                    }}
                </section>
            </div>
        </Show>
    }
}
