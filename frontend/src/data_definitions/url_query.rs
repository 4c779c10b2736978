//! Query string segment of the search route.

use std::fmt::Display;

use common::{search_params, search_query::SearchQueryState};


/// The raw query string of `/search?...`, without the leading `?`.
///
/// The router hands it over untouched; [`search_params`] turns it into state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UrlQuery(pub String);

impl UrlQuery {
    pub fn from_state(state: &SearchQueryState) -> Self {
        UrlQuery(search_params::encode_state(state))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UrlQuery {
    fn from(value: &str) -> Self {
        UrlQuery(value.strip_prefix('?').unwrap_or(value).to_string())
    }
}

// Display the query in a way that can be parsed back by From<&str>
impl Display for UrlQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
