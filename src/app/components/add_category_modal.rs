//! "Add Category" modal.

use dioxus::prelude::*;

use crate::app::api_context::use_api;
use crate::app::toast_context::use_toasts;
use crate::state::categories::CategoryDraft;

#[component]
pub fn AddCategoryModal(
    /// Close without saving (also called after a successful save)
    on_close: EventHandler<()>,
    /// Called once the backend accepted the category
    on_created: EventHandler<()>,
) -> Element {
    let api = use_api();
    let toasts = use_toasts();
    let mut draft = use_signal(CategoryDraft::default);
    let mut saving = use_signal(|| false);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        if saving() {
            return;
        }
        let category = match draft.read().validate() {
            Ok(category) => category,
            Err(e) => {
                tracing::debug!("Category form rejected: {}", e);
                toasts.error(CategoryDraft::BLANK_MESSAGE);
                return;
            }
        };
        let api = api.clone();
        saving.set(true);
        spawn(async move {
            let result = api.add_category(&category).await;
            saving.set(false);
            match result {
                Ok(resp) => {
                    toasts.success(
                        resp.message
                            .unwrap_or_else(|| CategoryDraft::ADDED_MESSAGE.to_string()),
                    );
                    draft.write().clear();
                    on_created.call(());
                    on_close.call(());
                }
                Err(e) => {
                    tracing::warn!("Add category failed: {}", e);
                    toasts.error(e.user_message("Failed to add category"));
                }
            }
        });
    };

    let name = draft.read().name.clone();

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal card",
                h2 { "Add Category" }
                form { onsubmit: submit,
                    input {
                        class: "input",
                        placeholder: "Enter category name",
                        value: "{name}",
                        oninput: move |e| draft.write().name = e.value(),
                    }
                    div { class: "modal-actions",
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: saving(),
                            "ADD"
                        }
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            onclick: move |_| {
                                draft.write().clear();
                                on_close.call(());
                            },
                            "DISCARD"
                        }
                    }
                }
            }
        }
    }
}
