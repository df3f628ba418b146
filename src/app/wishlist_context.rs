//! Wishlist context: the one [`WishlistStore`] every component reads.
//!
//! Network calls are spawned at the root scope, which owns the store, so a
//! mutation started from a card or the dropdown still settles after that
//! component unmounts.

use dioxus::core::spawn_forever;
use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::app::api_context::use_api;
use crate::app::session_context::use_session;
use crate::app::toast_context::{use_toasts, ToastContext};
use crate::state::wishlist::{MutationState, WishlistOp, WishlistStore};

pub const LOGIN_REQUIRED: &str = "Please login to use wishlist.";
pub const UPDATE_FAILED: &str = "Wishlist update failed";
pub const LOAD_FAILED: &str = "Failed to load wishlist";

#[derive(Clone, Copy)]
pub struct WishlistContext {
    store: Signal<WishlistStore>,
    toasts: ToastContext,
}

impl WishlistContext {
    pub fn contains(&self, product_id: &str) -> bool {
        self.store.read().contains(product_id)
    }

    pub fn is_pending(&self, product_id: &str) -> bool {
        self.store.read().is_pending(product_id)
    }

    pub fn status(&self, product_id: &str) -> Option<MutationState> {
        self.store.read().status(product_id).cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.store.read().is_fetching()
    }

    pub fn store(&self) -> Signal<WishlistStore> {
        self.store
    }

    /// Re-fetch the signed-in user's wishlist. A no-op while a fetch is in
    /// flight; the store asks again if it was invalidated meanwhile.
    pub fn refresh(&self, api: ApiClient) {
        let mut store = self.store;
        let toasts = self.toasts;
        let Some(ticket) = store.write().begin_refresh() else {
            return;
        };

        spawn_forever(async move {
            match api.fetch_wishlist(&ticket.user_id).await {
                Ok(items) => {
                    store.write().finish_refresh(&ticket, items);
                }
                Err(e) => {
                    tracing::warn!("Wishlist fetch failed: {}", e);
                    store.write().refresh_failed(&ticket);
                    toasts.error(LOAD_FAILED);
                }
            }
        });
    }

    /// Add or remove `product_id`, optimistically.
    pub fn toggle(&self, api: ApiClient, product_id: &str) {
        let mut store = self.store;
        let toasts = self.toasts;

        if store.peek().user_id().is_none() {
            toasts.error(LOGIN_REQUIRED);
            return;
        }
        let Some(mutation) = store.write().begin_toggle(product_id) else {
            tracing::debug!("Wishlist toggle for {} already in flight", product_id);
            return;
        };

        spawn_forever(async move {
            let result = match mutation.op {
                WishlistOp::Add => {
                    api.add_to_wishlist(&mutation.user_id, &mutation.product_id)
                        .await
                }
                WishlistOp::Remove => {
                    api.remove_from_wishlist(&mutation.user_id, &mutation.product_id)
                        .await
                }
            };
            match result {
                Ok(()) => {
                    store.write().confirm(&mutation);
                    toasts.success(mutation.op.success_message());
                }
                Err(e) => {
                    tracing::warn!("Wishlist update for {} failed: {}", mutation.product_id, e);
                    store.write().fail(&mutation, e.to_string());
                    toasts.error(UPDATE_FAILED);
                }
            }
        });
    }
}

/// Initialize wishlist context provider - call once at app root, after the
/// session and toast providers
pub fn use_wishlist_provider() {
    let api = use_api();
    let session = use_session();
    let toasts = use_toasts();
    let mut store = use_signal(WishlistStore::new);

    let ctx = WishlistContext { store, toasts };
    use_context_provider(|| ctx);

    // Follow the signed-in user
    use_effect(move || {
        let user_id = session.user_id();
        store.write().set_user(user_id);
    });

    // Re-fetch whenever the store is invalidated or a refresh lands outdated
    use_effect(move || {
        if store.read().needs_refresh() {
            ctx.refresh(api.clone());
        }
    });
}

/// Get wishlist context - use in any component
pub fn use_wishlist() -> WishlistContext {
    use_context::<WishlistContext>()
}
