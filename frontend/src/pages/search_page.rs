use dioxus::prelude::*;

use common::{search_params, url_sync::UrlSync};
use crate::{
    components::{
        search_components::{
            search_filters_panel::SearchFiltersPanel,
            search_results_grid::SearchResultsGrid,
            search_toolbar::SearchToolbar,
        },
        suspend_boundary::SuspendWrapper,
    },
    data_definitions::url_query::UrlQuery,
    hooks::use_search::use_search,
    routes::Route,
};


fn title_ellipsis(title: &str) -> String {
    if title.chars().count() > 20 {
        title.chars().take(18).collect::<String>() + "..."
    } else {
        title.to_string()
    }
}

/// Search results page. All of its state lives in the query string.
#[component]
pub fn SearchPage(query: UrlQuery) -> Element {
    let title = search_params::decode(query.as_str()).query_text;
    let title = if title.is_empty() { "All Products".to_string() } else { title_ellipsis(&title) };

    rsx! {
        Title { "Fund Finder: {title}" }
        SearchPageRootComponent { url_query: query.0.clone() }
    }
}

#[component]
fn SearchPageRootComponent(url_query: ReadSignal<String>) -> Element {
    let search = use_search(move || search_params::decode(&url_query.peek()));
    let mut url_sync = use_signal(UrlSync::new);
    let filters_open = use_signal(|| false);
    use_context_provider(move || search);

    // URL to state: back/forward and pasted links. The router re-renders this
    // component with a new query, which does not reset our signals.
    use_effect(move || {
        let current = url_query.read().clone();
        let external = url_sync.write().observe_url(&current);
        if let Some(state) = external {
            search.apply_external(state);
        }
    });

    // state to URL, replacing the history entry
    use_effect(move || {
        let state = search.controller.read().url_state();
        let current = url_query.peek().clone();
        let written = url_sync.write().publish(&state, &current);
        if let Some(query) = written {
            navigator().replace(Route::SearchPage { query: UrlQuery(query) });
        }
    });

    rsx! {
        div {
            id: "x-search-page-root-component",
            style: "
                width: 100%;
                display: flex;
                flex-direction: column;
            ",

            SearchToolbar { filters_open }

            div {
                id: "x-search-results-space",
                style: "
                    width: 100%;
                    display: flex;
                    flex-direction: row;
                    align-items: flex-start;
                    gap: 24px;
                    padding: 20px 24px;
                    box-sizing: border-box;
                ",
                SearchFiltersPanel { filters_open }
                div {
                    id: "x-search-results-main",
                    style: "flex-grow: 1; min-width: 0;",
                    SuspendWrapper { SearchResultsGrid {} }
                }
            }
        }
    }
}
