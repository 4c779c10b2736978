//! Page links under the results grid.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdChevronLeft, MdChevronRight}};

use common::pagination::{PageLink, has_next, has_previous, page_links, total_pages};
use crate::hooks::use_search::SearchHandle;


/// Changing page scrolls the window back to the top of the results.
fn scroll_to_top() {
    let Some(window) = web_sys::window() else { return };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[component]
pub fn SearchPagination() -> Element {
    let search = use_context::<SearchHandle>();
    let page = use_memo(move || search.controller.read().page());
    let total = use_memo(move || {
        let controller = search.controller.read();
        total_pages(controller.count(), controller.page_size())
    });
    let links = use_memo(move || page_links(page(), total()));

    let go_to = move |target: u64| {
        search.set_page(target);
        scroll_to_top();
    };

    if total() <= 1 {
        return rsx! {};
    }

    rsx! {
        nav {
            class: "x-pagination",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 6px;
                padding: 24px 0;
            ",

            button {
                class: "x-page-button",
                disabled: !has_previous(page()),
                onclick: move |_| go_to(page().saturating_sub(1)),
                Icon { icon: MdChevronLeft, style: "width: 20px; height: 20px;" }
            }

            for (i, link) in links().into_iter().enumerate() {
                {match link {
                    PageLink::Page(n) => rsx! {
                        button {
                            key: "page-{n}",
                            class: if n == page() { "x-page-button x-page-current" } else { "x-page-button" },
                            onclick: move |_| go_to(n),
                            "{n}"
                        }
                    },
                    PageLink::Gap => rsx! {
                        span { key: "gap-{i}", style: "padding: 0 6px; color: #6B7280;", "…" }
                    },
                }}
            }

            button {
                class: "x-page-button",
                disabled: !has_next(page(), total()),
                onclick: move |_| go_to(page() + 1),
                Icon { icon: MdChevronRight, style: "width: 20px; height: 20px;" }
            }
        }
    }
}
