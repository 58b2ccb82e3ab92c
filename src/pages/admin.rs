//! Admin back-office layout and pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The entire branch mounts behind `RequireAdmin`, so none of these pages
//! render (or run effects) for anonymous visitors or plain customers. The
//! CRUD screens are deliberately thin wrappers over list/create/update/delete
//! endpoints; the interesting behavior here is the guard coverage and the
//! account screen's change-password form.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::pages::account::ChangePasswordForm;
use crate::state::session::{self, SessionState};

/// Shared chrome for the admin branch: sidebar navigation plus the routed
/// child page.
#[component]
pub fn AdminLayout() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let display_name = move || {
        session
            .get()
            .user
            .map(|u| u.full_name)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        session::logout(session);
    };

    view! {
        <div class="admin-shell">
            <aside class="admin-shell__sidebar">
                <p class="admin-shell__brand">"SynFood Admin"</p>
                <nav>
                    <a href="/dashboard">"Dashboard"</a>
                    <a href="/user">"Users"</a>
                    <a href="/category">"Categories"</a>
                    <a href="/product">"Products"</a>
                    <a href="/product-option">"Product Options"</a>
                    <a href="/coupon">"Coupons"</a>
                    <a href="/order">"Orders"</a>
                    <a href="/review">"Reviews"</a>
                    <a href="/warehouse">"Warehouse"</a>
                    <a href="/blog-admin">"Blog"</a>
                    <a href="/setting">"Settings"</a>
                    <a href="/account-admin">"Account"</a>
                </nav>
                <p class="admin-shell__self">{display_name}</p>
                <button class="btn admin-shell__logout" on:click=on_logout>
                    "Logout"
                </button>
            </aside>
            <main class="admin-shell__content">
                <Outlet/>
            </main>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="admin-dashboard">
            <h1>"Dashboard"</h1>
            <p>"Orders, revenue, and activity at a glance."</p>
        </div>
    }
}

/// Admin account screen; hosts the same change-password form as the
/// storefront account page.
#[component]
pub fn AccountAdminPage() -> impl IntoView {
    view! {
        <div class="admin-account">
            <h1>"Account"</h1>
            <ChangePasswordForm/>
        </div>
    }
}

/// Placeholder body for the thin CRUD screens.
#[component]
pub fn AdminSection(title: &'static str) -> impl IntoView {
    view! {
        <div class="admin-section">
            <h1>{title}</h1>
            <p>"Management screen."</p>
        </div>
    }
}
