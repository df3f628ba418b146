//! "Add Sub Category" modal. The parent category list is fetched each time
//! the modal opens.

use dioxus::prelude::*;

use crate::app::api_context::use_api;
use crate::app::toast_context::use_toasts;
use crate::models::Category;
use crate::state::categories::SubCategoryDraft;

#[component]
pub fn AddSubCategoryModal(on_close: EventHandler<()>, on_created: EventHandler<()>) -> Element {
    let api = use_api();
    let toasts = use_toasts();
    let mut draft = use_signal(SubCategoryDraft::default);
    let mut categories = use_signal(Vec::<Category>::new);
    let mut saving = use_signal(|| false);

    let fetch_api = api.clone();
    use_effect(move || {
        let api = fetch_api.clone();
        spawn(async move {
            match api.list_categories().await {
                Ok(list) => categories.set(list),
                Err(e) => {
                    tracing::warn!("Category fetch failed: {}", e);
                    toasts.error("Failed to load categories");
                }
            }
        });
    });

    let submit = move |e: FormEvent| {
        e.prevent_default();
        if saving() {
            return;
        }
        let sub_category = match draft.read().validate() {
            Ok(sub_category) => sub_category,
            Err(e) => {
                tracing::debug!("Subcategory form rejected: {}", e);
                toasts.error(SubCategoryDraft::INVALID_MESSAGE);
                return;
            }
        };
        let api = api.clone();
        saving.set(true);
        spawn(async move {
            let result = api.add_subcategory(&sub_category).await;
            saving.set(false);
            match result {
                Ok(resp) => {
                    toasts.success(
                        resp.message
                            .unwrap_or_else(|| SubCategoryDraft::ADDED_MESSAGE.to_string()),
                    );
                    draft.write().clear();
                    on_created.call(());
                    on_close.call(());
                }
                Err(e) => {
                    tracing::warn!("Add subcategory failed: {}", e);
                    toasts.error(e.user_message("Failed to add subcategory"));
                }
            }
        });
    };

    let selected = draft.read().category_id.clone();
    let name = draft.read().name.clone();

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal card",
                h2 { "Add Sub Category" }
                form { onsubmit: submit,
                    select {
                        class: "input",
                        value: "{selected}",
                        onchange: move |e| draft.write().category_id = e.value(),
                        option { value: "", "Select category" }
                        for category in categories.read().iter() {
                            option {
                                key: "{category.id}",
                                value: "{category.id}",
                                selected: category.id == selected,
                                "{category.name}"
                            }
                        }
                    }
                    input {
                        class: "input",
                        placeholder: "Enter sub category name",
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
