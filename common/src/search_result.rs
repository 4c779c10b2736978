use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchResultKind {
    Etf,
    Equity,
}

impl SearchResultKind {
    pub fn badge(self) -> &'static str {
        match self {
            SearchResultKind::Etf => "ETF",
            SearchResultKind::Equity => "Stock",
        }
    }

    /// Label of the suggestion group holding this kind.
    pub fn group_label(self) -> &'static str {
        match self {
            SearchResultKind::Etf => "ETFs",
            SearchResultKind::Equity => "Stocks",
        }
    }
}

/// One tradable product as returned by the search service.
///
/// ETF-only fields are `None` for equities and equity-only fields are `None`
/// for ETFs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub symbol: String,
    pub display_name: String,
    pub kind: SearchResultKind,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub inception_date: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub domicile: String,
    #[serde(default)]
    pub exchange: String,
    #[serde(default)]
    pub one_year_return: Option<String>,
    #[serde(default)]
    pub five_year_return: Option<String>,
    #[serde(default)]
    pub asset_classes: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub asset_categories: Vec<String>,
    #[serde(default)]
    pub trailing_12m_dividend_yield: Option<String>,
    #[serde(default)]
    pub forward_12m_dividend_yield: Option<String>,
    #[serde(default)]
    pub is_flagship_fund: bool,
    #[serde(default)]
    pub flagship_description_short: Option<String>,
    #[serde(default)]
    pub flagship_image_url: Option<String>,
    #[serde(default)]
    pub discoverable_tags: Vec<String>,

    // ETF
    #[serde(default)]
    pub classification: Option<String>,
    #[serde(default)]
    pub sub_classification: Option<String>,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub fund_size: Option<String>,
    #[serde(default)]
    pub management_fee: Option<String>,
    #[serde(default)]
    pub dividend_frequency: Option<String>,
    #[serde(default)]
    pub investment_suitability: Option<String>,
    #[serde(default)]
    pub management_approach: Option<String>,

    // equity
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub market_capitalisation: Option<String>,
    #[serde(default)]
    pub pe_ratio_ttm: Option<String>,
    #[serde(default)]
    pub total_assets: Option<String>,
    #[serde(default)]
    pub total_revenue: Option<String>,
    #[serde(default)]
    pub quick_ratio: Option<String>,
    #[serde(default)]
    pub current_ratio: Option<String>,
    #[serde(default)]
    pub price_to_book_ratio: Option<String>,
}

impl SearchResult {
    pub fn is_etf(&self) -> bool {
        self.kind == SearchResultKind::Etf
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    /// Total matches, may exceed `results.len()`.
    pub count: u64,
    /// Epoch milliseconds of the index snapshot that answered.
    #[serde(default)]
    pub indexed_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionGroup {
    pub label: String,
    pub items: Vec<SearchResult>,
}

/// Splits suggestions into "ETFs" then "Stocks", leaving out empty groups.
/// Order inside each group follows the service's ranking.
pub fn group_by_kind(results: Vec<SearchResult>) -> Vec<SuggestionGroup> {
    let (etfs, equities): (Vec<_>, Vec<_>) = results.into_iter().partition(SearchResult::is_etf);
    [(SearchResultKind::Etf, etfs), (SearchResultKind::Equity, equities)]
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .map(|(kind, items)| SuggestionGroup {
            label: kind.group_label().to_string(),
            items,
        })
        .collect()
}


#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn product(symbol: &str, kind: SearchResultKind) -> SearchResult {
        SearchResult {
            symbol: symbol.to_string(),
            display_name: format!("{symbol} product"),
            kind,
            logo: None,
            inception_date: "2015-05-26".to_string(),
            currency: "AUD".to_string(),
            domicile: "AU".to_string(),
            exchange: "ASX".to_string(),
            one_year_return: Some("12.5".to_string()),
            five_year_return: None,
            asset_classes: vec![],
            categories: vec![],
            asset_categories: vec![],
            trailing_12m_dividend_yield: None,
            forward_12m_dividend_yield: None,
            is_flagship_fund: false,
            flagship_description_short: None,
            flagship_image_url: None,
            discoverable_tags: vec![],
            classification: None,
            sub_classification: None,
            issuer: None,
            fund_size: None,
            management_fee: None,
            dividend_frequency: None,
            investment_suitability: None,
            management_approach: None,
            sector: None,
            market_capitalisation: None,
            pe_ratio_ttm: None,
            total_assets: None,
            total_revenue: None,
            quick_ratio: None,
            current_ratio: None,
            price_to_book_ratio: None,
        }
    }

    pub fn response(symbols: &[(&str, SearchResultKind)], count: u64) -> SearchResponse {
        SearchResponse {
            results: symbols.iter().map(|(symbol, kind)| product(symbol, *kind)).collect(),
            count,
            indexed_at: 1_700_000_000_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::product;
    use super::*;

    #[test]
    fn groups_etfs_before_stocks() {
        let groups = group_by_kind(vec![
            product("CBA", SearchResultKind::Equity),
            product("NDQ", SearchResultKind::Etf),
            product("BHP", SearchResultKind::Equity),
            product("A200", SearchResultKind::Etf),
        ]);
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, ["ETFs", "Stocks"]);
        let symbols: Vec<&str> = groups[1].items.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, ["CBA", "BHP"]);
    }

    #[test]
    fn empty_kind_group_is_omitted() {
        let groups = group_by_kind(vec![product("CBA", SearchResultKind::Equity)]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, "Stocks");
        assert!(group_by_kind(vec![]).is_empty());
    }

    #[test]
    fn decodes_service_payload_with_nulls() {
        let payload = r#"{
            "results": [{
                "symbol": "NDQ",
                "display_name": "Nasdaq 100 ETF",
                "kind": "etf",
                "inception_date": "2015-05-26",
                "currency": "AUD",
                "domicile": "AU",
                "exchange": "ASX",
                "one_year_return": "21.3",
                "five_year_return": null,
                "asset_classes": ["Equities"],
                "categories": [],
                "asset_categories": ["International Equities"],
                "trailing_12m_dividend_yield": null,
                "forward_12m_dividend_yield": null,
                "is_flagship_fund": true,
                "flagship_description_short": "Top 100 Nasdaq stocks",
                "flagship_image_url": null,
                "discoverable_tags": [],
                "classification": "Technology",
                "sub_classification": null,
                "issuer": "Betashares",
                "fund_size": "6500",
                "management_fee": "0.48",
                "dividend_frequency": "Semiannually",
                "investment_suitability": "Capital growth",
                "management_approach": "Passive",
                "sector": null,
                "market_capitalisation": null,
                "pe_ratio_ttm": null,
                "total_assets": null,
                "total_revenue": null,
                "quick_ratio": null,
                "current_ratio": null,
                "price_to_book_ratio": null
            }],
            "count": 1,
            "indexed_at": 1717000000000
        }"#;
        let response: SearchResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(response.count, 1);
        let ndq = &response.results[0];
        assert!(ndq.is_etf());
        assert_eq!(ndq.management_fee.as_deref(), Some("0.48"));
        assert_eq!(ndq.sector, None);
        assert_eq!(ndq.logo, None);
    }
}
