//! Two one-way syncs between the search state and the address bar.
//!
//! Writes from state to URL are remembered as "last self-written" so the URL
//! change notification they cause is recognized and not decoded back into
//! state. Only navigation from elsewhere (back/forward, a pasted link) flows
//! from URL to state.

use crate::search_params;
use crate::search_query::SearchQueryState;


#[derive(Debug, Clone, Default, PartialEq)]
pub struct UrlSync {
    last_self_written: Option<String>,
}

impl UrlSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_self_written(&self) -> Option<&str> {
        self.last_self_written.as_deref()
    }

    /// URL → state. `None` when `current_query` is the string this sync just
    /// wrote. The guard covers that one notification only: it is cleared on
    /// every observation, so navigating back to the same string later decodes.
    pub fn observe_url(&mut self, current_query: &str) -> Option<SearchQueryState> {
        if self.last_self_written.take().as_deref() == Some(current_query) {
            return None;
        }
        Some(search_params::decode(current_query))
    }

    /// State → URL. Returns the query string to write (replacing the current
    /// history entry) when it differs from `current_query`.
    pub fn publish(&mut self, state: &SearchQueryState, current_query: &str) -> Option<String> {
        let encoded = search_params::encode_state(state);
        if encoded == current_query {
            return None;
        }
        self.last_self_written = Some(encoded.clone());
        Some(encoded)
    }
}
