//! Filter sidebar. On narrow screens it becomes a drawer toggled from the toolbar.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_navigation_icons::MdClose, md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}}};

use common::{
    search_const::{ASSET_CATEGORIES, DIVIDEND_FREQUENCIES, INVESTMENT_SUITABILITIES, MANAGEMENT_APPROACHES, PRODUCT_KINDS},
    search_filters::{ArrayFilterKey, FilterSet, RangeBound, RangeFilterKey},
};
use crate::hooks::use_search::SearchHandle;


/// (value, label) choices offered for `key`. Values already selected through
/// the URL are appended so they can be unticked.
fn filter_options(key: ArrayFilterKey, filters: &FilterSet) -> Vec<(String, String)> {
    let mut options: Vec<(String, String)> = match key {
        ArrayFilterKey::Kind => PRODUCT_KINDS.iter().map(|(v, l)| (v.to_string(), l.to_string())).collect(),
        ArrayFilterKey::AssetCategories => plain(ASSET_CATEGORIES),
        ArrayFilterKey::ManagementApproach => plain(MANAGEMENT_APPROACHES),
        ArrayFilterKey::DividendFrequency => plain(DIVIDEND_FREQUENCIES),
        ArrayFilterKey::InvestmentSuitability => plain(INVESTMENT_SUITABILITIES),
        ArrayFilterKey::FundCategory => Vec::new(),
    };
    for value in filters.values(key) {
        if !options.iter().any(|(v, _)| v == value) {
            options.push((value.clone(), value.clone()));
        }
    }
    options
}

fn plain(values: &[&str]) -> Vec<(String, String)> {
    values.iter().map(|v| (v.to_string(), v.to_string())).collect()
}

#[component]
pub fn SearchFiltersPanel(filters_open: Signal<bool>) -> Element {
    let search = use_context::<SearchHandle>();
    let mut filters_open = filters_open;
    let has_filters = use_memo(move || !search.controller.read().filters().is_empty());

    rsx! {
        aside {
            id: "x-search-filters-panel",
            class: if filters_open() { "x-filters-panel x-open" } else { "x-filters-panel" },

            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 8px; padding-bottom: 8px;",
                h2 { style: "font-size: 18px; font-weight: 600; color: #0F172A;", "Filters" }
                div { style: "flex-grow: 1;" }
                if has_filters() {
                    button {
                        class: "x-link-button",
                        onclick: move |_| search.update_filters(FilterSet::clear),
                        "Clear all"
                    }
                }
                button {
                    class: "x-icon-button x-drawer-close",
                    title: "Close filters",
                    onclick: move |_| filters_open.set(false),
                    Icon { icon: MdClose, style: "width: 20px; height: 20px;" }
                }
            }

            for key in ArrayFilterKey::ALL {
                CheckboxFilterGroup { key: "{key.as_str()}", filter_key: key }
            }
            for key in RangeFilterKey::ALL {
                RangeFilterGroup { key: "{key.as_str()}", filter_key: key }
            }
        }
    }
}

#[component]
fn CheckboxFilterGroup(filter_key: ArrayFilterKey) -> Element {
    let search = use_context::<SearchHandle>();
    let options = use_memo(move || filter_options(filter_key, search.controller.read().filters()));

    if options.read().is_empty() {
        return rsx! {};
    }

    rsx! {
        fieldset {
            class: "x-filter-group",
            legend { "{filter_key.display_name()}" }
            for (value, label) in options() {
                CheckboxFilterOption { key: "{value}", filter_key, value, label }
            }
        }
    }
}

#[component]
fn CheckboxFilterOption(filter_key: ArrayFilterKey, value: String, label: String) -> Element {
    let search = use_context::<SearchHandle>();
    let checked = use_memo({
        let value = value.clone();
        move || search.controller.read().filters().contains(filter_key, &value)
    });

    rsx! {
        button {
            class: "x-checkbox-option",
            role: "checkbox",
            aria_checked: "{checked}",
            onclick: move |_| {
                let value = value.clone();
                search.update_filters(move |filters| filters.toggle_value(filter_key, &value));
            },
            if checked() {
                Icon { icon: MdCheckBox, style: "width: 20px; height: 20px; color: #4F46E5;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 20px; height: 20px; color: #6B7280;" }
            }
            span { "{label}" }
        }
    }
}

#[component]
fn RangeFilterGroup(filter_key: RangeFilterKey) -> Element {
    rsx! {
        fieldset {
            class: "x-filter-group",
            legend { "{filter_key.display_name()}" }
            div {
                style: "display: flex; flex-direction: row; gap: 8px;",
                RangeBoundInput { filter_key, bound: RangeBound::Min }
                RangeBoundInput { filter_key, bound: RangeBound::Max }
            }
        }
    }
}

#[component]
fn RangeBoundInput(filter_key: RangeFilterKey, bound: RangeBound) -> Element {
    let search = use_context::<SearchHandle>();
    let value = use_memo(move || {
        let controller = search.controller.read();
        controller
            .filters()
            .range(filter_key)
            .and_then(|range| range.bound(bound))
            .unwrap_or_default()
            .to_string()
    });
    let placeholder = match bound {
        RangeBound::Min => "Min",
        RangeBound::Max => "Max",
    };

    rsx! {
        input {
            class: "x-range-input",
            r#type: "number",
            step: filter_key.input_step(),
            placeholder,
            value: "{value}",
            // commit on change rather than per keystroke
            onchange: move |e: Event<FormData>| {
                let text = e.value();
                search.update_filters(move |filters| filters.set_range_bound(filter_key, bound, text.trim()));
            },
        }
    }
}
