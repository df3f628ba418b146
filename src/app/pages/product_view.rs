//! Product detail page: gallery, RAM variants, quantity stepper, buy now.

use dioxus::prelude::*;

use crate::app::api_context::use_api;
use crate::app::components::{ErrorAlert, Layout, WishlistHeart};
use crate::app::toast_context::use_toasts;
use crate::state::product_detail::ProductDetail;
use crate::state::products::LoadState;

/// Route target. Keyed so that navigating to another product remounts the
/// page and drops the previous product's state and in-flight fetch.
#[component]
pub fn ProductView(product_id: String) -> Element {
    rsx! {
        ProductPage { key: "{product_id}", product_id: product_id.clone() }
    }
}

#[component]
fn ProductPage(product_id: String) -> Element {
    let api = use_api();
    let mut detail = use_signal(LoadState::<Option<ProductDetail>>::default);
    let mut attempt = use_signal(|| 0u32);

    let id = product_id.clone();
    use_effect(move || {
        let _ = attempt();
        let api = api.clone();
        let id = id.clone();
        detail.set(LoadState::Loading);
        spawn(async move {
            let next = match api.fetch_product(&id).await {
                Ok(product) => LoadState::Loaded(product.map(ProductDetail::new)),
                Err(e) => {
                    tracing::warn!("Product {} fetch failed: {}", id, e);
                    LoadState::Failed(e.user_message("Failed to load product."))
                }
            };
            detail.set(next);
        });
    });

    let body = match detail.read().clone() {
        LoadState::Idle | LoadState::Loading => rsx! {
            p { class: "text-muted", "Loading product..." }
        },
        LoadState::Failed(message) => rsx! {
            ErrorAlert { message, on_retry: move |_| attempt += 1 }
        },
        LoadState::Loaded(None) => rsx! {
            p { class: "text-muted", "No product found" }
        },
        LoadState::Loaded(Some(current)) => rsx! {
            ProductDetailView { detail, current }
        },
    };

    rsx! {
        Layout { title: "Product", {body} }
    }
}

/// Apply `f` to the loaded product; other states are left alone.
fn update(
    mut detail: Signal<LoadState<Option<ProductDetail>>>,
    f: impl FnOnce(&mut ProductDetail),
) {
    if let LoadState::Loaded(Some(d)) = &mut *detail.write() {
        f(d);
    }
}

#[component]
fn ProductDetailView(
    detail: Signal<LoadState<Option<ProductDetail>>>,
    current: ProductDetail,
) -> Element {
    let toasts = use_toasts();

    let product = current.product().clone();
    let main_image = current.current_image().map(str::to_string);
    let image_index = current.image_index();
    let selected_ram = current.selected_ram().map(str::to_string);
    let price = current.price_label();
    let stock = current.stock();
    let quantity = current.quantity();
    let can_decrease = current.can_decrease();
    let can_increase = current.can_increase();

    rsx! {
        div { class: "product-detail",
            div { class: "gallery",
                if let Some(src) = main_image {
                    img { class: "gallery-main", src: "{src}", alt: "{product.title}" }
                } else {
                    div { class: "gallery-main placeholder", "No image" }
                }
                div { class: "gallery-thumbs",
                    for (index, src) in product.images.iter().cloned().enumerate() {
                        img {
                            key: "{index}",
                            class: if index == image_index { "thumb thumb-active" } else { "thumb" },
                            src: "{src}",
                            onclick: move |_| update(detail, |d| d.select_image(index)),
                        }
                    }
                }
            }

            div { class: "product-info",
                div { class: "product-info-header",
                    h1 { "{product.title}" }
                    WishlistHeart { product_id: product.id.clone() }
                }
                p { class: "product-price", "{price}" }
                p { class: "text-muted",
                    if stock > 0 { "In stock: {stock}" } else { "Out of stock" }
                }
                p { "{product.description}" }

                div { class: "variants",
                    span { "Ram: " }
                    for variant in product.variants.iter().cloned() {
                        button {
                            key: "{variant.ram}",
                            class: if selected_ram.as_deref() == Some(variant.ram.as_str()) { "btn btn-primary btn-sm" } else { "btn btn-ghost btn-sm" },
                            onclick: move |_| update(detail, |d| d.select_ram(&variant.ram)),
                            "{variant.ram}"
                        }
                    }
                }

                div { class: "stepper",
                    span { "Quantity: " }
                    button {
                        class: "btn btn-ghost btn-sm",
                        disabled: !can_decrease,
                        onclick: move |_| update(detail, ProductDetail::decrease),
                        "−"
                    }
                    span { class: "stepper-value", "{quantity}" }
                    button {
                        class: "btn btn-ghost btn-sm",
                        disabled: !can_increase,
                        onclick: move |_| update(detail, ProductDetail::increase),
                        "+"
                    }
                }

                div { class: "product-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| match current.buy_now() {
                            Ok(message) => toasts.success(message),
                            Err(e) => toasts.error(e.to_string()),
                        },
                        "Buy it now"
                    }
                }
            }
        }
    }
}
