//! Public storefront pages: menu, product detail, blog, and static content.
//!
//! These screens are thin wrappers over guest endpoints; only the menu and
//! product-detail pages do any fetching, and both drop late responses once
//! the route has been left.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::Dish;

#[component]
pub fn MenuPage() -> impl IntoView {
    let dishes = RwSignal::new(Vec::<Dish>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_dishes().await;
            if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            match result {
                Ok(items) => {
                    dishes.try_set(items);
                }
                Err(err) => {
                    error.try_set(Some(err.message));
                }
            }
            loading.try_set(false);
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    loading.set(false);

    view! {
        <div class="menu-page">
            <h1>"Our Menu"</h1>
            <Show when=move || error.get().is_some()>
                <p class="menu-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=move || view! { <p>"Loading dishes..."</p> }>
                <ul class="menu-page__grid">
                    {move || {
                        dishes
                            .get()
                            .into_iter()
                            .map(|dish| {
                                let href = format!("/product-detail/{}", dish.dish_id);
                                let price = dish.offer_price.unwrap_or(dish.price);
                                view! {
                                    <li class="dish-card">
                                        <a href=href>
                                            <span class="dish-card__name">{dish.dish_name}</span>
                                            <span class="dish-card__price">{format!("${price:.2}")}</span>
                                        </a>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
        </div>
    }
}

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let params = use_params_map();
    let dish = RwSignal::new(None::<Dish>);
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        let slug = params.with_untracked(|p| p.get("slug").unwrap_or_default());
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_dish_detail(&slug).await;
            if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            if let Ok(found) = result {
                dish.try_set(Some(found));
            }
            loading.try_set(false);
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = &params;
        loading.set(false);
    }

    view! {
        <div class="product-detail-page">
            <Show when=move || !loading.get() fallback=move || view! { <p>"Loading..."</p> }>
                {move || match dish.get() {
                    Some(found) => view! {
                        <article class="dish-detail">
                            <h1>{found.dish_name}</h1>
                            <p class="dish-detail__price">
                                {format!("${:.2}", found.offer_price.unwrap_or(found.price))}
                            </p>
                        </article>
                    }
                    .into_any(),
                    None => view! { <p>"This dish is no longer on the menu."</p> }.into_any(),
                }}
            </Show>
        </div>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <h1>"About SynFood"</h1>
            <p>"A small kitchen with big plates, cooking since 2021."</p>
        </div>
    }
}

#[component]
pub fn BlogPage() -> impl IntoView {
    view! {
        <div class="blog-page">
            <h1>"Blog"</h1>
            <p>"Stories and recipes from the kitchen."</p>
        </div>
    }
}

#[component]
pub fn BlogDetailPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.with(|p| p.get("slug").unwrap_or_default());
    view! {
        <div class="blog-detail-page">
            <h1>{slug}</h1>
        </div>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="contact-page">
            <h1>"Contact"</h1>
            <p>"synfood.bmt@gmail.com · +84 966 501 365"</p>
        </div>
    }
}

#[component]
pub fn FaqsPage() -> impl IntoView {
    view! {
        <div class="faqs-page">
            <h1>"Frequently asked questions"</h1>
        </div>
    }
}

#[component]
pub fn PrivacyPolicyPage() -> impl IntoView {
    view! {
        <div class="privacy-page">
            <h1>"Privacy policy"</h1>
        </div>
    }
}

#[component]
pub fn TermsAndConditionsPage() -> impl IntoView {
    view! {
        <div class="terms-page">
            <h1>"Terms and conditions"</h1>
        </div>
    }
}
