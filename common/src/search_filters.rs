//! Typed product filters.
//!
//! A [`FilterSet`] only ever holds keys that constrain the search: an array
//! filter with no values or a range filter with no bounds is removed instead
//! of being stored empty.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};


/// Filters expressed as a set of acceptable discrete values.
///
/// Variant order is the order used on the wire and in the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrayFilterKey {
    Kind,
    AssetCategories,
    FundCategory,
    InvestmentSuitability,
    ManagementApproach,
    DividendFrequency,
}

impl ArrayFilterKey {
    pub const ALL: [ArrayFilterKey; 6] = [
        ArrayFilterKey::Kind,
        ArrayFilterKey::AssetCategories,
        ArrayFilterKey::FundCategory,
        ArrayFilterKey::InvestmentSuitability,
        ArrayFilterKey::ManagementApproach,
        ArrayFilterKey::DividendFrequency,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ArrayFilterKey::Kind => "kind",
            ArrayFilterKey::AssetCategories => "asset_categories",
            ArrayFilterKey::FundCategory => "fund_category",
            ArrayFilterKey::InvestmentSuitability => "investment_suitability",
            ArrayFilterKey::ManagementApproach => "management_approach",
            ArrayFilterKey::DividendFrequency => "dividend_frequency",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ArrayFilterKey::Kind => "Product Type",
            ArrayFilterKey::AssetCategories => "Asset Category",
            ArrayFilterKey::FundCategory => "Fund Category",
            ArrayFilterKey::InvestmentSuitability => "Investment Suitability",
            ArrayFilterKey::ManagementApproach => "Management Approach",
            ArrayFilterKey::DividendFrequency => "Dividend Frequency",
        }
    }
}

/// Filters expressed as an inclusive lower and/or upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeFilterKey {
    FundSize,
    ManagementFee,
    OneYearReturn,
    FiveYearReturn,
}

impl RangeFilterKey {
    pub const ALL: [RangeFilterKey; 4] = [
        RangeFilterKey::FundSize,
        RangeFilterKey::ManagementFee,
        RangeFilterKey::OneYearReturn,
        RangeFilterKey::FiveYearReturn,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RangeFilterKey::FundSize => "fund_size",
            RangeFilterKey::ManagementFee => "management_fee",
            RangeFilterKey::OneYearReturn => "one_year_return",
            RangeFilterKey::FiveYearReturn => "five_year_return",
        }
    }

    /// URL parameter carrying the lower bound, e.g. `fund_size_min`.
    pub fn min_param(self) -> &'static str {
        match self {
            RangeFilterKey::FundSize => "fund_size_min",
            RangeFilterKey::ManagementFee => "management_fee_min",
            RangeFilterKey::OneYearReturn => "one_year_return_min",
            RangeFilterKey::FiveYearReturn => "five_year_return_min",
        }
    }

    /// URL parameter carrying the upper bound, e.g. `fund_size_max`.
    pub fn max_param(self) -> &'static str {
        match self {
            RangeFilterKey::FundSize => "fund_size_max",
            RangeFilterKey::ManagementFee => "management_fee_max",
            RangeFilterKey::OneYearReturn => "one_year_return_max",
            RangeFilterKey::FiveYearReturn => "five_year_return_max",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            RangeFilterKey::FundSize => "Fund Size ($M)",
            RangeFilterKey::ManagementFee => "Management Fee (%)",
            RangeFilterKey::OneYearReturn => "1 Year Return (%)",
            RangeFilterKey::FiveYearReturn => "5 Year Return (%)",
        }
    }

    /// `step` attribute for the number inputs of this range.
    pub fn input_step(self) -> &'static str {
        match self {
            RangeFilterKey::FundSize => "1",
            RangeFilterKey::ManagementFee => "0.01",
            RangeFilterKey::OneYearReturn | RangeFilterKey::FiveYearReturn => "0.1",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeBound {
    Min,
    Max,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RangeFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
}

impl RangeFilter {
    /// Empty strings are treated as "no bound".
    pub fn new(min: Option<String>, max: Option<String>) -> Self {
        Self {
            min: min.filter(|m| !m.is_empty()),
            max: max.filter(|m| !m.is_empty()),
        }
    }

    pub fn is_active(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    pub fn bound(&self, bound: RangeBound) -> Option<&str> {
        match bound {
            RangeBound::Min => self.min.as_deref(),
            RangeBound::Max => self.max.as_deref(),
        }
    }
}

/// One active constraint, as yielded by [`FilterSet::iter`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActiveFilter<'a> {
    Values { key: ArrayFilterKey, values: &'a [String] },
    Range { key: RangeFilterKey, range: &'a RangeFilter },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "FilterSetParts")]
pub struct FilterSet {
    arrays: BTreeMap<ArrayFilterKey, Vec<String>>,
    ranges: BTreeMap<RangeFilterKey, RangeFilter>,
}

// Deserialized input goes back through the normalizing setters.
#[derive(Deserialize, Default)]
#[serde(default)]
struct FilterSetParts {
    arrays: BTreeMap<ArrayFilterKey, Vec<String>>,
    ranges: BTreeMap<RangeFilterKey, RangeFilter>,
}

impl From<FilterSetParts> for FilterSet {
    fn from(parts: FilterSetParts) -> Self {
        let mut filters = FilterSet::default();
        for (key, values) in parts.arrays {
            filters.set_values(key, values);
        }
        for (key, range) in parts.ranges {
            filters.set_range(key, range);
        }
        filters
    }
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values<I, S>(mut self, key: ArrayFilterKey, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_values(key, values);
        self
    }

    pub fn with_range(mut self, key: RangeFilterKey, min: Option<&str>, max: Option<&str>) -> Self {
        self.set_range(key, RangeFilter::new(min.map(str::to_string), max.map(str::to_string)));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.arrays.is_empty() && self.ranges.is_empty()
    }

    /// Number of keys carrying a constraint.
    pub fn active_count(&self) -> usize {
        self.arrays.len() + self.ranges.len()
    }

    pub fn values(&self, key: ArrayFilterKey) -> &[String] {
        self.arrays.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, key: ArrayFilterKey, value: &str) -> bool {
        self.values(key).iter().any(|v| v == value)
    }

    pub fn range(&self, key: RangeFilterKey) -> Option<&RangeFilter> {
        self.ranges.get(&key)
    }

    /// Replaces the values of an array filter, keeping first-seen order and
    /// dropping blanks and duplicates. No remaining values removes the key.
    ///
    /// A comma cannot be part of a value since the URL joins values with it:
    /// `"Growth, Income"` is stored as `["Growth", "Income"]`.
    pub fn set_values<I, S>(&mut self, key: ArrayFilterKey, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut kept: Vec<String> = Vec::new();
        for value in values {
            for part in value.into().split(',') {
                let part = part.trim();
                if !part.is_empty() && !kept.iter().any(|v| v == part) {
                    kept.push(part.to_string());
                }
            }
        }
        if kept.is_empty() {
            self.arrays.remove(&key);
        } else {
            self.arrays.insert(key, kept);
        }
    }

    /// Adds the value if absent, removes it otherwise.
    pub fn toggle_value(&mut self, key: ArrayFilterKey, value: &str) {
        let mut values = self.values(key).to_vec();
        if let Some(position) = values.iter().position(|v| v == value) {
            values.remove(position);
        } else {
            values.push(value.to_string());
        }
        self.set_values(key, values);
    }

    pub fn set_range(&mut self, key: RangeFilterKey, range: RangeFilter) {
        let range = RangeFilter::new(range.min, range.max);
        if range.is_active() {
            self.ranges.insert(key, range);
        } else {
            self.ranges.remove(&key);
        }
    }

    /// Updates one bound of a range filter; an empty value clears that bound.
    pub fn set_range_bound(&mut self, key: RangeFilterKey, bound: RangeBound, value: &str) {
        let mut range = self.range(key).cloned().unwrap_or_default();
        let value = Some(value.to_string());
        match bound {
            RangeBound::Min => range.min = value,
            RangeBound::Max => range.max = value,
        }
        self.set_range(key, range);
    }

    pub fn clear(&mut self) {
        self.arrays.clear();
        self.ranges.clear();
    }

    /// Active constraints, array filters first, each group in key order.
    pub fn iter(&self) -> impl Iterator<Item = ActiveFilter<'_>> {
        let arrays = self
            .arrays
            .iter()
            .map(|(key, values)| ActiveFilter::Values { key: *key, values: values.as_slice() });
        let ranges = self
            .ranges
            .iter()
            .map(|(key, range)| ActiveFilter::Range { key: *key, range });
        arrays.chain(ranges)
    }
}
