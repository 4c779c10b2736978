use dioxus::prelude::*;

use common::search_const::SORT_OPTIONS;
use crate::hooks::use_search::SearchHandle;


#[component]
pub fn SearchOrdering() -> Element {
    let search = use_context::<SearchHandle>();
    let order_by = use_memo(move || search.controller.read().order_by().to_string());

    rsx! {
        label {
            style: "display: flex; align-items: center; gap: 8px; font-size: 14px; color: #4B5770;",
            "Sort by"
            select {
                class: "x-select",
                value: "{order_by}",
                onchange: move |e: Event<FormData>| search.set_order_by(e.value()),
                for option in SORT_OPTIONS.iter() {
                    option {
                        key: "{option.value}",
                        value: "{option.value}",
                        selected: *order_by.read() == option.value,
                        "{option.label}"
                    }
                }
            }
        }
    }
}
