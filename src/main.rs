//! Storefront - Rust Implementation
//!
//! Serves the Dioxus app (SSR + hydration natively, client-only in the browser).

use storefront::app::App;

fn main() {
    #[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
    init_logging();

    dioxus::launch(App);
}

#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let default_filter = match storefront::config::load_config() {
        Ok(config) => config.log_filter,
        Err(_) => storefront::config::DEFAULT_LOG_FILTER.to_string(),
    };

    // Dioxus installs its own logger when nothing is registered yet
    let installed = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok();

    tracing::info!(
        "Starting Storefront v{} ({}), logger installed: {}",
        env!("STOREFRONT_VERSION"),
        env!("STOREFRONT_GIT_SHA"),
        installed
    );
}
