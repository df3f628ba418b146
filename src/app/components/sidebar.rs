//! Category sidebar: expandable tree with subcategory filter checkboxes.

use dioxus::prelude::*;

use crate::app::api_context::use_api;
use crate::app::toast_context::use_toasts;
use crate::state::categories::CategoryTree;

#[component]
pub fn Sidebar(
    /// Tree state, owned by the page so the checkboxes can filter its list
    tree: Signal<CategoryTree>,
    /// Bumped after a category or subcategory is created
    refresh: Signal<u32>,
) -> Element {
    let api = use_api();
    let toasts = use_toasts();
    let mut loading = use_signal(|| false);
    let mut tree = tree;

    // Each refresh bump issues a new load; an older one landing late is dropped
    use_effect(move || {
        let generation = refresh();
        let api = api.clone();
        let load = tree.write().begin_load();
        loading.set(true);
        spawn(async move {
            let result = api.list_categories().await;
            if !tree.peek().is_current(load) {
                return;
            }
            match result {
                Ok(categories) => {
                    tracing::debug!(
                        "Loaded {} categories (refresh {})",
                        categories.len(),
                        generation
                    );
                    tree.write().finish_load(load, categories);
                }
                Err(e) => {
                    tracing::warn!("Category fetch failed: {}", e);
                    toasts.error("Failed to load categories");
                }
            }
            loading.set(false);
        });
    });

    let snapshot = tree.read().clone();
    let has_selection = !snapshot.selection().is_empty();

    rsx! {
        aside { class: "sidebar card",
            div { class: "sidebar-header",
                h2 { "Categories" }
                if has_selection {
                    button {
                        class: "btn btn-ghost btn-sm",
                        onclick: move |_| tree.write().clear_selection(),
                        "Clear"
                    }
                }
            }
            if loading() && snapshot.categories().is_empty() {
                p { class: "text-muted", "Loading..." }
            } else if snapshot.categories().is_empty() {
                p { class: "text-muted", "No categories yet." }
            }
            ul { class: "tree",
                for category in snapshot.categories().iter().cloned() {
                    li { key: "{category.id}",
                        button {
                            class: "tree-toggle",
                            onclick: {
                                let id = category.id.clone();
                                move |_| tree.write().toggle_expanded(&id)
                            },
                            if snapshot.is_expanded(&category.id) { "▾ " } else { "▸ " }
                            "{category.name}"
                        }
                        if snapshot.is_expanded(&category.id) {
                            ul { class: "tree-children",
                                for sub in category.sub_categories.iter().cloned() {
                                    li { key: "{sub.id}",
                                        label { class: "checkbox-label",
                                            input {
                                                r#type: "checkbox",
                                                checked: snapshot.is_selected(&sub.id),
                                                onchange: {
                                                    let id = sub.id.clone();
                                                    move |e: FormEvent| tree.write().set_selected(&id, e.checked())
                                                },
                                            }
                                            "{sub.name}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
