//! Product grid card with a wishlist heart.

use dioxus::prelude::*;

use crate::app::api_context::use_api;
use crate::app::wishlist_context::use_wishlist;
use crate::app::Route;
use crate::models::Product;
use crate::state::product_detail::format_price;
use crate::state::wishlist::MutationState;

#[component]
pub fn ProductCard(product: Product) -> Element {
    let price = product
        .list_price()
        .map(format_price)
        .unwrap_or_else(|| "N/A".to_string());
    let cover = product.cover_image().map(str::to_string);
    let product_id = product.id.clone();

    rsx! {
        div { class: "product-card card",
            Link { to: Route::ProductView { product_id: product_id.clone() },
                if let Some(src) = cover {
                    img { class: "product-image", src: "{src}", alt: "{product.title}" }
                } else {
                    div { class: "product-image placeholder", "No image" }
                }
                h3 { class: "product-title", "{product.title}" }
                p { class: "product-price", "{price}" }
            }
            WishlistHeart { product_id }
        }
    }
}

/// Filled when the product is in the shared wishlist; disabled while a
/// toggle is in flight.
#[component]
pub fn WishlistHeart(product_id: String) -> Element {
    let api = use_api();
    let wishlist = use_wishlist();

    let member = wishlist.contains(&product_id);
    let pending = wishlist.is_pending(&product_id);
    let failed = matches!(wishlist.status(&product_id), Some(MutationState::Failed(_)));
    let class = match (member, failed) {
        (true, _) => "heart heart-on",
        (false, true) => "heart heart-failed",
        (false, false) => "heart",
    };

    rsx! {
        button {
            class: "{class}",
            title: if member { "Remove from wishlist" } else { "Add to wishlist" },
            disabled: pending,
            onclick: move |_| wishlist.toggle(api.clone(), &product_id),
            if member { "♥" } else { "♡" }
        }
    }
}
