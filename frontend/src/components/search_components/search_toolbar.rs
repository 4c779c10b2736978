//! Search box, heading and result count above the results grid.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSearch, md_content_icons::{MdClear, MdFilterList}}};

use common::pagination::result_count_label;
use crate::{
    components::{search_components::search_ordering::SearchOrdering, suspend_boundary::LoadingIndicator},
    hooks::use_search::SearchHandle,
};


#[component]
pub fn SearchToolbar(filters_open: Signal<bool>) -> Element {
    rsx! {
        div {
            id: "x-search-toolbar",
            style: "
                display: flex;
                flex-direction: column;
                gap: 14px;
                padding: 20px 24px 12px 24px;
                border-bottom: 1px solid #E5E7EB;
                background-color: #F8FCFF;
            ",

            SearchQueryInput {}

            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    flex-wrap: wrap;
                    align-items: center;
                    gap: 16px;
                ",
                SearchHeading {}
                ResultCount {}
                // empty space
                div { style: "flex-grow: 1;" }
                FiltersButton { filters_open }
                SearchOrdering {}
            }
        }
    }
}

#[component]
fn SearchQueryInput() -> Element {
    let search = use_context::<SearchHandle>();
    let query_text = use_memo(move || search.controller.read().query_text().to_string());

    rsx! {
        div {
            id: "x-search-query-box",
            style: "
                display: flex;
                align-items: center;
                gap: 12px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 44px;
                max-width: 560px;
                border: 1px solid rgba(101, 101, 101, 0.8);
            ",
            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color: #6B7280;" }
            input {
                r#type: "search",
                placeholder: "Search ETFs and stocks by name or ticker",
                style: "
                    flex: 1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 17px;
                ",
                value: "{query_text}",
                oninput: move |e: Event<FormData>| search.set_query(e.value()),
            }
        }
    }
}

#[component]
fn SearchHeading() -> Element {
    let search = use_context::<SearchHandle>();
    let debounced = use_memo(move || search.controller.read().debounced_query().trim().to_string());

    rsx! {
        h1 {
            style: "font-size: 22px; font-weight: 500; color: #0F172A; display: flex; align-items: center; gap: 8px;",
            if debounced.read().is_empty() {
                "All Products"
            } else {
                "Results for “{debounced}”"
                button {
                    class: "x-icon-button",
                    title: "Clear search term",
                    onclick: move |_| search.set_query(String::new()),
                    Icon { icon: MdClear, style: "width: 18px; height: 18px;" }
                }
            }
        }
    }
}

#[component]
fn ResultCount() -> Element {
    let search = use_context::<SearchHandle>();
    let is_loading = use_memo(move || search.controller.read().is_loading());
    let count = use_memo(move || search.controller.read().count());

    rsx! {
        if is_loading() {
            LoadingIndicator {}
        } else {
            span {
                style: "font-size: 15px; color: #4B5770;",
                "{result_count_label(count())}"
            }
        }
    }
}

#[component]
fn FiltersButton(filters_open: Signal<bool>) -> Element {
    let search = use_context::<SearchHandle>();
    let mut filters_open = filters_open;
    let active = use_memo(move || search.controller.read().filters().active_count());
    let label = use_memo(move || match active() {
        0 => "Filters".to_string(),
        n => format!("Filters ({n})"),
    });

    rsx! {
        button {
            class: "x-button x-filters-button",
            onclick: move |_| filters_open.set(!filters_open()),
            Icon { icon: MdFilterList, style: "width: 18px; height: 18px;" }
            "{label}"
        }
    }
}
