//! Top bar: search, wishlist, sign in/out, cart.

use dioxus::prelude::*;

use super::wishlist_dropdown::WishlistDropdown;
use crate::app::api_context::use_api;
use crate::app::session_context::use_session;
use crate::app::toast_context::use_toasts;
use crate::app::Route;
use crate::state::auth::LOGOUT_SUCCESS;

#[component]
pub fn Header(
    /// Called with the raw search text on submit
    on_search: Option<EventHandler<String>>,
) -> Element {
    let api = use_api();
    let session = use_session();
    let toasts = use_toasts();
    let nav = use_navigator();
    let mut search_text = use_signal(String::new);
    let mut show_wishlist = use_signal(|| false);

    let logged_in = session.is_logged_in();

    rsx! {
        header { class: "header",
            Link { class: "brand", to: Route::Home {}, "Storefront" }

            if let Some(on_search) = on_search {
                form {
                    class: "search",
                    onsubmit: move |e: FormEvent| {
                        e.prevent_default();
                        on_search.call(search_text());
                    },
                    input {
                        class: "input",
                        r#type: "search",
                        placeholder: "Search any things",
                        value: "{search_text}",
                        oninput: move |e| search_text.set(e.value()),
                    }
                    button { class: "btn btn-primary", r#type: "submit", "Search" }
                }
            }

            nav { class: "header-actions",
                div { class: "dropdown-anchor",
                    button {
                        class: "btn btn-ghost",
                        title: "Wishlist",
                        onclick: move |_| show_wishlist.toggle(),
                        "♡ Wishlist"
                    }
                    if show_wishlist() {
                        WishlistDropdown { on_close: move |_| show_wishlist.set(false) }
                    }
                }
                if logged_in {
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| {
                            session.logout(api.session());
                            toasts.success(LOGOUT_SUCCESS);
                            show_wishlist.set(false);
                            nav.push(Route::Login {});
                        },
                        "Logout"
                    }
                } else {
                    Link { class: "btn btn-ghost", to: Route::Login {}, "Sign in" }
                }
                span { class: "btn btn-ghost", title: "Cart", "Cart" }
            }
        }
    }
}
