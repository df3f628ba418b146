//! Access to the shared [`ApiClient`] installed at the app root.

use dioxus::prelude::*;

use crate::api::ApiClient;

/// Get the API client - use in any component below the root
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}
