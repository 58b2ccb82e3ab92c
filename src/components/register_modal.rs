//! Registration overlay shown on top of the home page at `/register`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::notify::NotifyState;
use crate::util::validate;

#[component]
pub fn RegisterModal() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();
    let location = use_location();
    let navigate = use_navigate();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let is_open = move || location.pathname.get() == "/register";

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
        let checked = validate::require("full name", &full_name.get()).and_then(|name| {
            let email_value = validate::require("email", &email.get())?;
            validate::check_new_password(&password.get(), &confirm.get())?;
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
        {
            let navigate = navigate_submit.clone();
            let password_value = password.get();
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_up(&email_value, &password_value, &name_value).await {
                    Ok(ack) => {
                        let detail = ack
                            .message
                            .unwrap_or_else(|| "Please verify your email to finish signing up.".to_owned());
                        notify.update(|n| n.push_success(format!("Registration successful! {detail}")));
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(err) => {
                        notify.update(|n| n.push_error("Registration failed!", err.message));
                    }
                }
                submitting.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate_submit, name_value, email_value);
            submitting.set(false);
        }
    };

    view! {
        <Show when=is_open>
            <div class="modal-backdrop" on:click=on_close.clone()>
                <section class="modal auth-modal" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Create an account"</h2>
                    <form class="auth-form" on:submit=on_submit.clone()>
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
                        <label class="auth-form__label">
                            "Password"
                            <input
                                class="auth-form__input"
                                type="password"
                                placeholder="Password"
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
                            {move || if submitting.get() { "Creating..." } else { "Register" }}
                        </button>
                    </form>
                    <p class="auth-modal__alt">
                        "Already registered? " <a href="/login">"Login"</a>
                    </p>
                </section>
            </div>
        </Show>
    }
}
