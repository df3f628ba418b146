//! Wishlist dropdown under the header heart.

use dioxus::prelude::*;

use crate::app::api_context::use_api;
use crate::app::session_context::use_session;
use crate::app::wishlist_context::{use_wishlist, LOGIN_REQUIRED};
use crate::app::Route;
use crate::state::product_detail::format_price;

#[component]
pub fn WishlistDropdown(on_close: EventHandler<()>) -> Element {
    let api = use_api();
    let session = use_session();
    let wishlist = use_wishlist();

    // Opening the dropdown always re-fetches
    let refresh_api = api.clone();
    use_effect(move || {
        wishlist.refresh(refresh_api.clone());
    });

    let store = wishlist.store();
    let store = store.read();
    let items: Vec<_> = store.items().into_iter().cloned().collect();

    rsx! {
        div { class: "dropdown card",
            div { class: "dropdown-header",
                strong { "Wishlist" }
                button {
                    class: "btn btn-ghost btn-sm",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
            }
            if !session.is_logged_in() {
                p { class: "text-muted", "{LOGIN_REQUIRED}" }
            } else if wishlist.is_loading() && !store.is_loaded() {
                p { class: "text-muted", "Loading wishlist..." }
            } else if items.is_empty() {
                p { class: "text-muted", "Your wishlist is empty." }
            } else {
                ul { class: "dropdown-list",
                    for product in items {
                        li { key: "{product.id}", class: "dropdown-item",
                            Link {
                                to: Route::ProductView { product_id: product.id.clone() },
                                onclick: move |_| on_close.call(()),
                                "{product.title}"
                            }
                            span { class: "text-muted",
                                {product.list_price().map(format_price).unwrap_or_else(|| "N/A".to_string())}
                            }
                            button {
                                class: "btn btn-ghost btn-sm",
                                disabled: wishlist.is_pending(&product.id),
                                onclick: {
                                    let api = api.clone();
                                    let product_id = product.id.clone();
                                    move |_| wishlist.toggle(api.clone(), &product_id)
                                },
                                "Remove"
                            }
                        }
                    }
                }
            }
        }
    }
}
