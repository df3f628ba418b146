//! Pager controls under the product grid.

use dioxus::prelude::*;

use crate::state::products::{Pager, PAGE_SIZES};

#[component]
pub fn Pagination(
    pager: Pager,
    /// Items after filtering
    total: usize,
    on_page: EventHandler<usize>,
    on_per_page: EventHandler<usize>,
) -> Element {
    let page = pager.current_page(total);
    let pages = pager.page_count(total);
    let shown = pager.range(total).len();
    let per_page = pager.per_page();

    rsx! {
        div { class: "pagination",
            span { class: "text-muted", "{shown} of {total} items" }
            div { class: "pager",
                button {
                    class: "btn btn-ghost btn-sm",
                    disabled: page <= 1,
                    onclick: move |_| on_page.call(page.saturating_sub(1)),
                    "‹"
                }
                for n in 1..=pages {
                    button {
                        key: "{n}",
                        class: if n == page { "btn btn-primary btn-sm" } else { "btn btn-ghost btn-sm" },
                        onclick: move |_| on_page.call(n),
                        "{n}"
                    }
                }
                button {
                    class: "btn btn-ghost btn-sm",
                    disabled: page >= pages,
                    onclick: move |_| on_page.call(page + 1),
                    "›"
                }
            }
            label { class: "text-muted",
                "Show "
                select {
                    class: "input input-sm",
                    value: "{per_page}",
                    onchange: move |e| {
                        if let Ok(size) = e.value().parse::<usize>() {
                            on_per_page.call(size);
                        }
                    },
                    for size in PAGE_SIZES {
                        option {
                            key: "{size}",
                            value: "{size}",
                            selected: size == per_page,
                            "{size}"
                        }
                    }
                }
                " rows"
            }
        }
    }
}
