//! Results area: skeletons, error, empty state or the product grid.

use dioxus::prelude::*;

use common::search_const::PAGE_SIZE;
use crate::{
    components::{
        error_boundary::ComponentErrorDisplay,
        search_components::{
            product_card::{ProductCard, ProductCardSkeleton},
            search_pagination::SearchPagination,
        },
    },
    hooks::use_search::SearchHandle,
};


#[component]
pub fn SearchResultsGrid() -> Element {
    let search = use_context::<SearchHandle>();
    let is_loading = use_memo(move || search.controller.read().is_loading());
    let has_error = use_memo(move || search.controller.read().error());
    let results = use_memo(move || search.controller.read().results().to_vec());

    if is_loading() {
        return rsx! {
            div {
                class: "x-results-grid",
                for i in 0..PAGE_SIZE {
                    ProductCardSkeleton { key: "{i}" }
                }
            }
        };
    }

    if has_error() {
        return rsx! {
            ComponentErrorDisplay {
                title: "Something went wrong".to_string(),
                error_txt: "We couldn't load products right now. Please try again.".to_string(),
                button {
                    class: "x-button",
                    onclick: move |_| search.refresh(),
                    "Try again"
                }
            }
        };
    }

    if results.read().is_empty() {
        return rsx! {
            div {
                class: "x-panel",
                style: "display: flex; flex-direction: column; align-items: center; gap: 8px; padding: 48px 20px; text-align: center;",
                h2 { style: "font-size: 20px; font-weight: 600; color: #0F172A;", "No products found" }
                p { style: "font-size: 15px; color: #4B5563;", "Try a different search term or remove some filters." }
            }
        };
    }

    rsx! {
        div {
            class: "x-results-grid",
            for product in results() {
                ProductCard { key: "{product.symbol}", product }
            }
        }
        SearchPagination {}
    }
}
