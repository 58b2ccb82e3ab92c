//! Account page: profile summary, logout, and the change-password form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hosts the two authenticated mutations the auth core owns: profile update
//! and change-password. Both validate client-side first (no network on a bad
//! form), never mutate the session on server rejection, and rely on the
//! global expired-credential contract when the server says the token is
//! stale.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::notify::NotifyState;
use crate::state::session::{self, SessionState};
use crate::util::validate;

#[component]
pub fn AccountPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let identity = move || {
        session
            .get()
            .user
            .map(|u| (u.full_name, u.email))
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        session::logout(session);
    };

    view! {
        <div class="account-page">
            <h1>"My account"</h1>
            <p class="account-page__identity">
                {move || identity().0} " · " {move || identity().1}
            </p>
            <button class="btn account-page__logout" on:click=on_logout>
                "Logout"
            </button>
            <ProfileForm/>
            <ChangePasswordForm/>
        </div>
    }
}

/// Name/email edit form. A successful save updates the session copy in place;
/// a rejection leaves it untouched.
#[component]
fn ProfileForm() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();

    let initial = session.with_untracked(|s| {
        s.user
            .as_ref()
            .map(|u| (u.full_name.clone(), u.email.clone()))
            .unwrap_or_default()
    });
    let full_name = RwSignal::new(initial.0);
    let email = RwSignal::new(initial.1);
    let form_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let checked = validate::require("full name", &full_name.get()).and_then(|name| {
            let email_value = validate::require("email", &email.get())?;
            Ok((name, email_value))
        });
        let (name_value, email_value) = match checked {
            Ok(values) => values,
            Err(msg) => {
                form_error.set(Some(msg));
                return;
            }
        };
        form_error.set(None);
        submitting.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_profile(&name_value, &email_value).await {
                Ok(_) => {
                    session.update(|s| {
                        if let Some(user) = &mut s.user {
                            user.full_name = name_value;
                            user.email = email_value;
                        }
                    });
                    notify.update(|n| n.push_success("Profile updated!"));
                }
                Err(err) => {
                    session::note_auth_failure(session, &err);
                    notify.update(|n| n.push_error("Profile update failed!", err.message));
                }
            }
            submitting.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name_value, email_value);
            submitting.set(false);
        }
    };

    view! {
        <section class="profile-form">
            <h2>"Profile"</h2>
            <form class="auth-form" on:submit=on_submit>
                <label class="auth-form__label">
                    "Full Name"
                    <input
                        class="auth-form__input"
                        type="text"
                        placeholder="Full Name"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                </label>
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
                    {move || if submitting.get() { "Saving..." } else { "Save" }}
                </button>
            </form>
        </section>
    }
}

/// Change-password form shared by the account page and the admin account
/// screen.
#[component]
pub fn ChangePasswordForm() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let navigate = use_navigate();

    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }

        // No authenticated user id: nothing to change, no network call.
        let Some(user_id) = session.with(SessionState::user_id) else {
            notify.update(|n| {
                n.push_error("User not found", "Please login to change your password");
            });
            navigate("/login", NavigateOptions::default());
            return;
        };

        let old_value = match validate::require("old password", &old_password.get()) {
            Ok(v) => v,
            Err(msg) => {
                form_error.set(Some(msg));
                return;
            }
        };
        if let Err(msg) = validate::check_new_password(&new_password.get(), &confirm_password.get())
        {
            form_error.set(Some(msg));
            return;
        }
        form_error.set(None);
        submitting.set(true);

        #[cfg(feature = "hydrate")]
        {
            let new_value = new_password.get();
            leptos::task::spawn_local(async move {
                match crate::net::api::change_password(&user_id, &old_value, &new_value).await {
                    Ok(_) => {
                        notify.update(|n| n.push_success("Password changed successfully"));
                        old_password.try_set(String::new());
                        new_password.try_set(String::new());
                        confirm_password.try_set(String::new());
                    }
                    Err(err) => {
                        // Expired credentials clear the session; a plain
                        // rejection (wrong old password) does not.
                        session::note_auth_failure(session, &err);
                        notify.update(|n| n.push_error("Password change failed", err.message));
                    }
                }
                submitting.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, old_value);
            submitting.set(false);
        }
    };

    view! {
        <section class="change-password">
            <h2>"Change Password"</h2>
            <form class="auth-form" on:submit=on_submit>
                <label class="auth-form__label">
                    "Old Password"
                    <input
                        class="auth-form__input"
                        type="password"
                        placeholder="Old Password"
                        autocomplete="current-password"
                        prop:value=move || old_password.get()
                        on:input=move |ev| old_password.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "New Password"
                    <input
                        class="auth-form__input"
                        type="password"
                        placeholder="New Password"
                        autocomplete="new-password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Confirm Password"
                    <input
                        class="auth-form__input"
                        type="password"
                        placeholder="Confirm Password"
                        autocomplete="new-password"
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| confirm_password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || form_error.get().is_some()>
                    <p class="auth-form__error">{move || form_error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Updating..." } else { "Update Password" }}
                </button>
            </form>
        </section>
    }
}
