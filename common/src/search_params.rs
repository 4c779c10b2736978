//! URL query string representation of the search page state.
//!
//! Array filters use comma separated values: `kind=etf%2Cequity`.
//! Range filters use `_min`/`_max` suffixes: `fund_size_min=100&fund_size_max=500`.
//! Free text goes under `q`, ordering under `sort`, and `page` is only written
//! when it is not the first page.

use std::collections::BTreeMap;

use url::form_urlencoded;

use crate::search_filters::{ArrayFilterKey, FilterSet, RangeFilter, RangeFilterKey};
use crate::search_query::SearchQueryState;


pub const QUERY_PARAM: &str = "q";
pub const SORT_PARAM: &str = "sort";
pub const PAGE_PARAM: &str = "page";

/// Serializes search state into a form-urlencoded query string (no leading `?`).
pub fn encode(filters: &FilterSet, order_by: &str, query_text: &str, page: u64) -> String {
    let mut params = form_urlencoded::Serializer::new(String::new());

    if !query_text.is_empty() {
        params.append_pair(QUERY_PARAM, query_text);
    }
    if !order_by.is_empty() {
        params.append_pair(SORT_PARAM, order_by);
    }

    for key in ArrayFilterKey::ALL {
        let values = filters.values(key);
        if !values.is_empty() {
            params.append_pair(key.as_str(), &values.join(","));
        }
    }

    for key in RangeFilterKey::ALL {
        let Some(range) = filters.range(key) else { continue };
        if let Some(min) = &range.min {
            params.append_pair(key.min_param(), min);
        }
        if let Some(max) = &range.max {
            params.append_pair(key.max_param(), max);
        }
    }

    if page > 1 {
        params.append_pair(PAGE_PARAM, &page.to_string());
    }

    params.finish()
}

pub fn encode_state(state: &SearchQueryState) -> String {
    encode(&state.filters, &state.order_by, &state.query_text, state.page)
}

/// Parses a query string back into search state.
///
/// Never fails: missing or malformed values fall back to the defaults and a
/// page that is not a positive integer becomes 1. A leading `?` is accepted.
/// When a parameter repeats, its first occurrence wins.
pub fn decode(query_string: &str) -> SearchQueryState {
    let query_string = query_string.strip_prefix('?').unwrap_or(query_string);
    let mut params: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in form_urlencoded::parse(query_string.as_bytes()) {
        params.entry(name.into_owned()).or_insert_with(|| value.into_owned());
    }
    let get = |name: &str| params.get(name).map(String::as_str).filter(|v| !v.is_empty());

    let mut filters = FilterSet::new();
    for key in ArrayFilterKey::ALL {
        if let Some(raw) = get(key.as_str()) {
            filters.set_values(key, raw.split(',').filter(|segment| !segment.is_empty()));
        }
    }
    for key in RangeFilterKey::ALL {
        let min = get(key.min_param()).map(str::to_string);
        let max = get(key.max_param()).map(str::to_string);
        filters.set_range(key, RangeFilter::new(min, max));
    }

    SearchQueryState {
        query_text: get(QUERY_PARAM).unwrap_or_default().to_string(),
        filters,
        order_by: get(SORT_PARAM).unwrap_or_default().to_string(),
        page: get(PAGE_PARAM).map(parse_page).unwrap_or(1),
    }
}

fn parse_page(raw: &str) -> u64 {
    raw.trim().parse::<u64>().ok().filter(|page| *page >= 1).unwrap_or(1)
}
