//! Home page: category sidebar, searchable product grid, admin modals.

use dioxus::prelude::*;

use crate::app::api_context::use_api;
use crate::app::components::{
    AddCategoryModal, AddSubCategoryModal, ErrorAlert, Layout, Pagination, ProductCard, Sidebar,
};
use crate::app::toast_context::use_toasts;
use crate::models::Product;
use crate::state::categories::{filter_by_subcategory, CategoryTree};
use crate::state::products::{LoadState, Pager, ProductFeed, ProductQuery};

#[component]
pub fn Home() -> Element {
    let api = use_api();
    let toasts = use_toasts();
    let mut feed = use_signal(ProductFeed::new);
    let mut pager = use_signal(Pager::default);
    let tree = use_signal(CategoryTree::new);
    let mut categories_version = use_signal(|| 0u32);
    let mut show_add_category = use_signal(|| false);
    let mut show_add_sub_category = use_signal(|| false);

    // Every load takes a ticket; only the newest one lands
    let load = use_callback(move |query: ProductQuery| {
        let ticket = feed.write().begin(query);
        pager.write().reset();
        let api = api.clone();
        spawn(async move {
            let result = api.load_products(&ticket.query).await;
            if let Err(e) = &result {
                tracing::warn!("Product load {:?} failed: {}", ticket.query, e);
            }
            if feed.write().finish(&ticket, result) {
                if let LoadState::Failed(message) = feed.peek().state() {
                    toasts.error(message.clone());
                }
            }
        });
    });

    use_effect(move || load.call(ProductQuery::All));

    // A different subcategory filter starts from page 1
    let selection = use_memo(move || tree.read().selection().clone());
    use_effect(move || {
        let _ = selection.read();
        pager.write().reset();
    });

    let feed_ref = feed.read();
    let selected = selection.read();
    let filtered = filter_by_subcategory(feed_ref.products(), &selected);
    let total = filtered.len();
    let current = *pager.read();
    let page_items: Vec<Product> = current
        .slice(&filtered)
        .iter()
        .map(|p| (*p).clone())
        .collect();
    let state = feed_ref.state().clone();
    let query = feed_ref.query().clone();

    let body = match state {
        LoadState::Idle | LoadState::Loading => rsx! {
            p { class: "text-muted", "Loading products..." }
        },
        LoadState::Failed(message) => {
            let retry = query.clone();
            rsx! {
                ErrorAlert {
                    message,
                    on_retry: move |_| load.call(retry.clone()),
                }
            }
        }
        LoadState::Loaded(_) if total == 0 => rsx! {
            p { class: "text-muted", "No products available at the moment." }
        },
        LoadState::Loaded(_) => rsx! {
            div { class: "product-grid",
                for product in page_items {
                    ProductCard { key: "{product.id}", product }
                }
            }
            Pagination {
                pager: current,
                total,
                on_page: move |page| pager.write().set_page(page, total),
                on_per_page: move |size| pager.write().set_per_page(size),
            }
        },
    };

    rsx! {
        Layout {
            title: "Home",
            on_search: move |text: String| load.call(ProductQuery::from_input(&text)),

            div { class: "home",
                Sidebar { tree, refresh: categories_version }

                section { class: "catalog",
                    div { class: "toolbar",
                        if let ProductQuery::Search(text) = &query {
                            span { class: "text-muted", "Results for \"{text}\"" }
                        }
                        div { class: "toolbar-actions",
                            button {
                                class: "btn btn-primary",
                                onclick: move |_| show_add_category.set(true),
                                "Add Category"
                            }
                            button {
                                class: "btn btn-primary",
                                onclick: move |_| show_add_sub_category.set(true),
                                "Add Sub Category"
                            }
                        }
                    }

                    {body}
                }
            }

            if show_add_category() {
                AddCategoryModal {
                    on_close: move |_| show_add_category.set(false),
                    on_created: move |_| categories_version += 1,
                }
            }
            if show_add_sub_category() {
                AddSubCategoryModal {
                    on_close: move |_| show_add_sub_category.set(false),
                    on_created: move |_| categories_version += 1,
                }
            }
        }
    }
}
