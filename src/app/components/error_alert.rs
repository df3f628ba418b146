//! Inline error panel for a page whose data failed to load.

use dioxus::prelude::*;

/// Error message with an optional retry button.
#[component]
pub fn ErrorAlert(
    /// The error message to display
    message: String,
    /// Called when the retry button is clicked
    on_retry: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div { class: "card alert-error", role: "alert",
            "{message}"
            if let Some(on_retry) = on_retry {
                button {
                    class: "btn btn-ghost btn-sm",
                    onclick: move |_| on_retry.call(()),
                    "Retry"
                }
            }
        }
    }
}
