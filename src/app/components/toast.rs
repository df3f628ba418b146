//! Toast stack, rendered once at the app root.

use dioxus::prelude::*;

use crate::app::toast_context::use_toasts;
use crate::state::notify::ToastKind;

#[component]
pub fn ToastHost() -> Element {
    let toasts = use_toasts();

    rsx! {
        div { class: "toast-stack",
            for toast in toasts.toasts() {
                div {
                    key: "{toast.id}",
                    class: match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    },
                    role: "status",
                    span { "{toast.message}" }
                    button {
                        class: "btn btn-ghost btn-sm",
                        onclick: move |_| toasts.dismiss(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}
