//! Type-ahead search box with suggestions grouped into ETFs and Stocks.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use common::{search_result::SearchResult, text_highlight::highlight_query};
use crate::{hooks::use_suggestions::use_suggestions, routes::Route};


#[component]
pub fn SearchAutocomplete(placeholder: String) -> Element {
    let suggestions = use_suggestions();
    let input_value = use_memo(move || suggestions.controller.read().input_value().to_string());
    let groups = use_memo(move || suggestions.controller.read().groups().to_vec());
    let is_loading = use_memo(move || suggestions.controller.read().is_loading());
    let mut focused = use_signal(|| false);
    let popup_open = use_memo(move || focused() && !input_value.read().trim().is_empty() && (is_loading() || !groups.read().is_empty()));

    rsx! {
        div {
            class: "x-autocomplete",
            style: "position: relative; width: 100%; max-width: 560px;",

            div {
                style: "
                    display: flex;
                    align-items: center;
                    gap: 10px;
                    background-color: white;
                    border-radius: 9999px;
                    padding: 10px 14px;
                    height: 44px;
                    color: #111827;
                ",
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color: #6B7280;" }
                input {
                    r#type: "text",
                    placeholder: "{placeholder}",
                    style: "
                        flex: 1;
                        border: none;
                        outline: none;
                        background: transparent;
                        color: #111827;
                        font-size: 16px;
                    ",
                    value: "{input_value}",
                    oninput: move |e: Event<FormData>| suggestions.set_input(e.value()),
                    onfocus: move |_| focused.set(true),
                    onblur: move |_| focused.set(false),
                    onkeydown: move |e: Event<KeyboardData>| {
                        if e.key() == Key::Enter {
                            e.prevent_default();
                            navigator().push(Route::search_page_from_text(&input_value.read()));
                        }
                    },
                }
            }

            if popup_open() {
                div {
                    class: "x-autocomplete-popup",
                    role: "listbox",
                    if groups.read().is_empty() {
                        div { style: "padding: 12px 16px; color: #6B7280; font-size: 14px;", "Searching..." }
                    }
                    for group in groups() {
                        div {
                            key: "{group.label}",
                            class: "x-suggestion-group",
                            div { class: "x-suggestion-group-label", "{group.label}" }
                            for product in group.items {
                                SuggestionItem { key: "{product.symbol}", product, query: input_value() }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SuggestionItem(product: SearchResult, query: String) -> Element {
    let symbol = product.symbol.clone();

    rsx! {
        div {
            class: "x-suggestion-item",
            role: "option",
            // mousedown fires before the input's blur closes the popup
            onmousedown: move |e: Event<MouseData>| {
                e.prevent_default();
                navigator().push(Route::search_page_from_text(&symbol));
            },
            span {
                style: "font-weight: 600; min-width: 64px;",
                HighlightedText { text: product.symbol.clone(), query: query.clone() }
            }
            span {
                class: "x-ellipsis",
                style: "color: #4B5563;",
                HighlightedText { text: product.display_name.clone(), query }
            }
            span { class: "x-badge", "{product.kind.badge()}" }
        }
    }
}

#[component]
fn HighlightedText(text: String, query: String) -> Element {
    let segments = highlight_query(&text, &query);
    rsx! {
        for (i, segment) in segments.into_iter().enumerate() {
            if segment.is_highlighted {
                strong { key: "{i}", "{segment.text}" }
            } else {
                span { key: "{i}", "{segment.text}" }
            }
        }
    }
}
