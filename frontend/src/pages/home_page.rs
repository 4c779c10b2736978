use dioxus::prelude::*;

use common::search_const::PRODUCT_KINDS;
use common::search_filters::{ArrayFilterKey, FilterSet};
use common::search_query::SearchQueryState;
use crate::components::search_components::search_autocomplete::SearchAutocomplete;
use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Fund Finder - Home" }
        div {
            id: "x-home-container",
            style: "
                display: flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
            ",

            MainTitle {}
            SubText {}
            SearchHeroCard {}
            BrowseByKind {}
        }
    }
}

#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                color: #0F172A;
                font-size: 46px;
                font-weight: 500;
                letter-spacing: -0.02em;
            ",
            "Find your next "
            span { style: "color: #4F46E5;", "investment" }
        }
    }
}

#[component]
fn SubText() -> Element {
    rsx! {
        div {
            style: "
                color: #111827;
                font-size: 22px;
                line-height: 1.6;
                max-width: 640px;
                font-weight: 400;
            ",
            "Search ETFs and ASX-listed stocks by name or ticker, then narrow the list by asset class, fees, fund size and performance."
        }
    }
}

#[component]
fn SearchHeroCard() -> Element {
    rsx! {
        div {
            id: "x-card-search",
            style: "
                display: flex;
                flex-direction: column;
                gap: 14px;
                max-width: 640px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",
            div { style: "font-size: 26px; font-weight: 500;", "Product Search" }
            div {
                style: "font-size: 15px; color: rgba(255,255,255,0.9);",
                "Start typing for suggestions, or press Enter to see every match."
            }
            SearchAutocomplete { placeholder: "Try \"NDQ\" or \"Nasdaq\"" }
        }
    }
}

#[component]
fn BrowseByKind() -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: row; gap: 12px; flex-wrap: wrap;",
            Link {
                to: Route::search_page_from_state(&SearchQueryState::default()),
                class: "x-button",
                "All Products"
            }
            for (value, label) in PRODUCT_KINDS.iter() {
                Link {
                    key: "{value}",
                    to: Route::search_page_from_state(&SearchQueryState {
                        filters: FilterSet::new().with_values(ArrayFilterKey::Kind, [*value]),
                        ..Default::default()
                    }),
                    class: "x-button",
                    "Browse {label}"
                }
            }
        }
    }
}
