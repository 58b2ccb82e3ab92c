//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Outlet, ParentRoute, Route, Router, Routes},
};

use crate::components::protected::{RequireAdmin, RequireAuth, RequireCheckout};
use crate::components::toast::ToastStack;
use crate::pages::account::AccountPage;
use crate::pages::admin::{AccountAdminPage, AdminLayout, AdminSection, DashboardPage};
use crate::pages::cart::{
    CartPage, CheckoutPage, PaymentPage, PaymentReturnPage, StatusPaymentPage,
};
use crate::pages::home::HomePage;
use crate::pages::storefront::{
    AboutPage, BlogDetailPage, BlogPage, ContactPage, FaqsPage, MenuPage, PrivacyPolicyPage,
    ProductDetailPage, TermsAndConditionsPage,
};
use crate::state::cart::CartState;
use crate::state::notify::NotifyState;
use crate::state::session::{self, SessionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts, starts the one session hydration
/// attempt, and declares the two route branches: the public storefront and
/// the admin back office, each behind its guard where required.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let cart = RwSignal::new(CartState::default());
    let notify = RwSignal::new(NotifyState::default());

    provide_context(session);
    provide_context(cart);
    provide_context(notify);

    // Bootstrap: turn a stored token (if any) into a validated session.
    // Deduplicated internally, so re-mounts cannot double-fetch.
    session::hydrate(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront-client.css"/>
        <Title text="SynFood"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <ParentRoute path=StaticSegment("") view=PublicLayout>
                    <Route path=StaticSegment("") view=HomePage/>
                    // Auth overlays render on top of the home page.
                    <Route path=StaticSegment("login") view=HomePage/>
                    <Route path=StaticSegment("register") view=HomePage/>
                    <Route path=StaticSegment("forgot-password") view=HomePage/>
                    <Route path=StaticSegment("reset-password") view=HomePage/>
                    <Route path=StaticSegment("resend-verification-email") view=HomePage/>
                    <Route path=StaticSegment("verify-email") view=HomePage/>
                    <Route path=StaticSegment("callback") view=HomePage/>

                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("menu") view=MenuPage/>
                    <Route
                        path=(StaticSegment("product-detail"), ParamSegment("slug"))
                        view=ProductDetailPage
                    />
                    <Route path=StaticSegment("blog") view=BlogPage/>
                    <Route
                        path=(StaticSegment("blog-detail"), ParamSegment("slug"))
                        view=BlogDetailPage
                    />
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("faqs") view=FaqsPage/>
                    <Route path=StaticSegment("privacy-policy") view=PrivacyPolicyPage/>
                    <Route path=StaticSegment("terms-condition") view=TermsAndConditionsPage/>

                    <Route
                        path=StaticSegment("account")
                        view=|| view! { <RequireAuth><AccountPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("cart")
                        view=|| view! { <RequireAuth><CartPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("checkout")
                        view=|| view! { <RequireCheckout><CheckoutPage/></RequireCheckout> }
                    />
                    <Route
                        path=StaticSegment("payment")
                        view=|| view! { <RequireCheckout><PaymentPage/></RequireCheckout> }
                    />
                    <Route
                        path=(StaticSegment("payment"), StaticSegment("return"))
                        view=|| view! { <RequireCheckout><PaymentReturnPage/></RequireCheckout> }
                    />
                    <Route
                        path=StaticSegment("status-payment")
                        view=|| view! { <RequireCheckout><StatusPaymentPage/></RequireCheckout> }
                    />
                </ParentRoute>

                // Admin branch: the guard wraps the whole layout, so no admin
                // page renders for non-staff sessions.
                <ParentRoute path=StaticSegment("") view=AdminGate>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("user") view=|| view! { <AdminSection title="Users"/> }/>
                    <Route path=StaticSegment("category") view=|| view! { <AdminSection title="Categories"/> }/>
                    <Route path=StaticSegment("product") view=|| view! { <AdminSection title="Products"/> }/>
                    <Route path=StaticSegment("product-option") view=|| view! { <AdminSection title="Product Options"/> }/>
                    <Route path=StaticSegment("coupon") view=|| view! { <AdminSection title="Coupons"/> }/>
                    <Route path=StaticSegment("order") view=|| view! { <AdminSection title="Orders"/> }/>
                    <Route path=StaticSegment("review") view=|| view! { <AdminSection title="Reviews"/> }/>
                    <Route path=StaticSegment("warehouse") view=|| view! { <AdminSection title="Warehouse"/> }/>
                    <Route path=StaticSegment("blog-admin") view=|| view! { <AdminSection title="Blog"/> }/>
                    <Route path=StaticSegment("setting") view=|| view! { <AdminSection title="Settings"/> }/>
                    <Route path=StaticSegment("account-admin") view=AccountAdminPage/>
                </ParentRoute>
            </Routes>
        </Router>

        <ToastStack/>
    }
}

/// Public storefront chrome: top navigation, the routed page, and a footer.
#[component]
fn PublicLayout() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let cart = expect_context::<RwSignal<CartState>>();

    view! {
        <div class="public-shell">
            <header class="public-shell__header">
                <a class="public-shell__brand" href="/">
                    "SynFood"
                </a>
                <nav class="public-shell__nav">
                    <a href="/menu">"Menu"</a>
                    <a href="/about">"About"</a>
                    <a href="/blog">"Blog"</a>
                    <a href="/contact">"Contact"</a>
                    <a href="/cart">{move || format!("Cart ({})", cart.get().unit_count())}</a>
                </nav>
                <nav class="public-shell__auth">
                    <Show
                        when=move || session.get().is_authenticated()
                        fallback=|| {
                            view! {
                                <a href="/login">"Login"</a>
                                <a href="/register">"Register"</a>
                            }
                        }
                    >
                        <a href="/account">"My account"</a>
                        <Show when=move || session.get().is_admin()>
                            <a href="/dashboard">"Admin"</a>
                        </Show>
                    </Show>
                </nav>
            </header>
            <main class="public-shell__content">
                <Outlet/>
            </main>
            <footer class="public-shell__footer">
                <a href="/faqs">"FAQs"</a>
                <a href="/privacy-policy">"Privacy"</a>
                <a href="/terms-condition">"Terms"</a>
            </footer>
        </div>
    }
}

/// Entry view for the admin branch: guard first, then the layout with its
/// routed child.
#[component]
fn AdminGate() -> impl IntoView {
    view! {
        <RequireAdmin>
            <AdminLayout/>
        </RequireAdmin>
    }
}
