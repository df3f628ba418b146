//! Dioxus fullstack application entry point.
//!
//! This module provides the root App component, the route table and the
//! app-wide contexts (API client, session, toasts, wishlist).

use dioxus::prelude::*;

use crate::api::{default_transport, ApiClient};
use crate::config;
use crate::session::Session;

pub mod api_context;
pub mod components;
pub mod pages;
pub mod session_context;
pub mod timer;
pub mod toast_context;
pub mod wishlist_context;

use components::ToastHost;
use pages::{Home, Login, ProductView, Signup};
use session_context::use_session_provider;
use toast_context::use_toast_provider;
use wishlist_context::use_wishlist_provider;

fn build_client() -> Result<ApiClient, String> {
    let config = config::load_config().map_err(|e| format!("{:#}", e))?;
    tracing::info!("Backend API at {}", config.api_url);
    ApiClient::new(&config.api_url, default_transport(), Session::persistent())
        .map_err(|e| e.to_string())
}

/// Root app component. A broken backend URL renders an error page instead of
/// the storefront.
#[component]
pub fn App() -> Element {
    let client = use_hook(build_client);

    match client {
        Ok(client) => rsx! {
            Storefront { client }
        },
        Err(message) => {
            tracing::error!("Invalid configuration: {}", message);
            rsx! {
                main { class: "config-error",
                    h1 { "Storefront is misconfigured" }
                    p { "{message}" }
                }
            }
        }
    }
}

/// Installs the shared contexts, then the router.
#[component]
fn Storefront(client: ApiClient) -> Element {
    use_context_provider(|| client.clone());

    // Order matters: the wishlist reads the session and toast contexts
    use_session_provider();
    use_toast_provider();
    use_wishlist_provider();

    rsx! {
        Router::<Route> {}
        ToastHost {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/signup")]
    Signup {},
    #[route("/login")]
    Login {},
    #[route("/product/:product_id")]
    ProductView { product_id: String },
}
