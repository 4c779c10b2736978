//! Constants shared by the search page, the type-ahead and the API client.

/// Number of products requested per search results page.
pub const PAGE_SIZE: u64 = 15;

/// Number of products requested for the type-ahead.
pub const SUGGESTION_SIZE: u64 = 10;

pub const SEARCH_DEBOUNCE_MS: u32 = 300;
pub const SUGGESTION_DEBOUNCE_MS: u32 = 300;

pub const DEFAULT_SEARCH_API_URL: &str = "https://search.betashares.services/search";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortOption {
    pub label: &'static str,
    pub value: &'static str,
}

/// Sort choices offered on the search page. The empty value is relevance ordering.
pub const SORT_OPTIONS: &[SortOption] = &[
    SortOption { label: "Relevance", value: "" },
    SortOption { label: "1 Year Return (High → Low)", value: "one_year_return.desc" },
    SortOption { label: "1 Year Return (Low → High)", value: "one_year_return.asc" },
    SortOption { label: "5 Year Return (High → Low)", value: "five_year_return.desc" },
    SortOption { label: "5 Year Return (Low → High)", value: "five_year_return.asc" },
    SortOption { label: "Fund Size (Large → Small)", value: "fund_size.desc" },
    SortOption { label: "Fund Size (Small → Large)", value: "fund_size.asc" },
    SortOption { label: "Mgmt Fee (Low → High)", value: "management_fee.asc" },
    SortOption { label: "Mgmt Fee (High → Low)", value: "management_fee.desc" },
];

/// (value, label) pairs for the product type filter.
pub const PRODUCT_KINDS: &[(&str, &str)] = &[("etf", "ETFs"), ("equity", "Stocks")];

pub const ASSET_CATEGORIES: &[&str] = &[
    "Australian Equities",
    "International Equities",
    "Australian Bonds",
    "International Bonds",
    "Cash",
    "Technology",
    "Thematic",
    "Shorts Funds & Geared Funds",
];

pub const MANAGEMENT_APPROACHES: &[&str] = &["Passive", "Active"];

pub const DIVIDEND_FREQUENCIES: &[&str] = &["Monthly", "Quarterly", "Semiannually", "Annually"];

pub const INVESTMENT_SUITABILITIES: &[&str] = &[
    "Capital growth",
    "Regular income",
    "Capital growth and regular income",
];
