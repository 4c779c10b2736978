//! Shared search query models and helpers.

use serde::{Deserialize, Serialize};

use crate::search_const::{PAGE_SIZE, SUGGESTION_SIZE};
use crate::search_filters::{ActiveFilter, ArrayFilterKey, FilterSet, RangeFilter, RangeFilterKey};


/// Everything that determines which page of products the search page shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchQueryState {
    pub query_text: String,
    pub filters: FilterSet,
    /// Empty means relevance ordering, otherwise `<field>.<asc|desc>`.
    pub order_by: String,
    /// 1-indexed.
    pub page: u64,
}

impl Default for SearchQueryState {
    fn default() -> Self {
        Self {
            query_text: String::new(),
            filters: FilterSet::default(),
            order_by: String::new(),
            page: 1,
        }
    }
}

impl SearchQueryState {
    pub fn from_query_text(query_text: impl Into<String>) -> Self {
        Self {
            query_text: query_text.into(),
            ..Self::default()
        }
    }
}

/// JSON body POSTed to the search service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_text: Option<String>,
    pub from: u64,
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fund_category: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investment_suitability: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub management_approach: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dividend_frequency: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fund_size: Option<RangeFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub management_fee: Option<RangeFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_year_return: Option<RangeFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub five_year_return: Option<RangeFilter>,
}

impl SearchRequest {
    /// Request for one page of the search page.
    ///
    /// `from` carries the 1-indexed page number, not an item offset.
    pub fn for_page(query_text: &str, filters: &FilterSet, order_by: &str, page: u64) -> Self {
        let search_text = query_text.trim();
        let mut request = Self {
            search_text: (!search_text.is_empty()).then(|| search_text.to_string()),
            from: page.max(1),
            size: PAGE_SIZE,
            order_by: (!order_by.is_empty()).then(|| order_by.to_string()),
            ..Self::default()
        };
        for filter in filters.iter() {
            request.apply_filter(filter);
        }
        request
    }

    /// Capped, unfiltered, unsorted request for the type-ahead.
    pub fn for_suggestions(input: &str) -> Self {
        Self {
            search_text: Some(input.to_string()),
            from: 1,
            size: SUGGESTION_SIZE,
            ..Self::default()
        }
    }

    fn apply_filter(&mut self, filter: ActiveFilter<'_>) {
        match filter {
            ActiveFilter::Values { key, values } => {
                let slot = match key {
                    ArrayFilterKey::Kind => &mut self.kind,
                    ArrayFilterKey::AssetCategories => &mut self.asset_categories,
                    ArrayFilterKey::FundCategory => &mut self.fund_category,
                    ArrayFilterKey::InvestmentSuitability => &mut self.investment_suitability,
                    ArrayFilterKey::ManagementApproach => &mut self.management_approach,
                    ArrayFilterKey::DividendFrequency => &mut self.dividend_frequency,
                };
                *slot = Some(values.to_vec());
            }
            ActiveFilter::Range { key, range } => {
                let slot = match key {
                    RangeFilterKey::FundSize => &mut self.fund_size,
                    RangeFilterKey::ManagementFee => &mut self.management_fee,
                    RangeFilterKey::OneYearReturn => &mut self.one_year_return,
                    RangeFilterKey::FiveYearReturn => &mut self.five_year_return,
                };
                *slot = Some(range.clone());
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn page_request_only_carries_active_constraints() {
        let filters = FilterSet::new()
            .with_values(ArrayFilterKey::Kind, ["etf"])
            .with_range(RangeFilterKey::ManagementFee, None, Some("0.5"));
        let request = SearchRequest::for_page("  NDQ ", &filters, "", 3);

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "search_text": "NDQ",
                "from": 3,
                "size": 15,
                "kind": ["etf"],
                "management_fee": {"max": "0.5"},
            })
        );
    }

    #[test]
    fn blank_text_and_default_order_are_omitted() {
        let request = SearchRequest::for_page("   ", &FilterSet::new(), "", 1);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, json!({"from": 1, "size": 15}));

        let request = SearchRequest::for_page("", &FilterSet::new(), "fund_size.desc", 2);
        assert_eq!(request.order_by.as_deref(), Some("fund_size.desc"));
    }

    #[test]
    fn suggestion_request_is_capped() {
        let request = SearchRequest::for_suggestions("vanguard");
        assert_eq!(request.size, 10);
        assert_eq!(request.from, 1);
        assert_eq!(request.search_text.as_deref(), Some("vanguard"));
        assert!(request.kind.is_none() && request.order_by.is_none());
    }
}
