//! State of the type-ahead on the home page.

use crate::debounce::{DebounceTicket, Debouncer};
use crate::request_tracker::{RequestToken, RequestTracker};
use crate::search_const::SUGGESTION_DEBOUNCE_MS;
use crate::search_error::SearchApiError;
use crate::search_query::SearchRequest;
use crate::search_result::{SearchResponse, SuggestionGroup, group_by_kind};


#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionDispatch {
    pub token: RequestToken,
    pub request: SearchRequest,
    pub superseded: Option<RequestToken>,
}

/// What settling the debounced input asks of the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionStep {
    /// Nothing to do: stale ticket.
    Idle,
    /// Input went blank: suggestions were cleared, abort this request if any.
    Cleared { cancelled: Option<RequestToken> },
    Fetch(SuggestionDispatch),
}

#[derive(Debug)]
pub struct SuggestionController {
    input_value: String,
    debouncer: Debouncer<String>,
    requests: RequestTracker,
    groups: Vec<SuggestionGroup>,
    is_loading: bool,
}

impl Default for SuggestionController {
    fn default() -> Self {
        Self::with_debounce(SUGGESTION_DEBOUNCE_MS)
    }
}

impl SuggestionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_debounce(debounce_ms: u32) -> Self {
        Self {
            input_value: String::new(),
            debouncer: Debouncer::new(debounce_ms),
            requests: RequestTracker::new(),
            groups: Vec::new(),
            is_loading: false,
        }
    }

    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    pub fn groups(&self) -> &[SuggestionGroup] {
        &self.groups
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn set_input(&mut self, value: impl Into<String>) -> DebounceTicket {
        let value = value.into();
        self.input_value = value.clone();
        self.debouncer.push(value)
    }

    pub fn settle(&mut self, ticket: DebounceTicket) -> SuggestionStep {
        let Some(value) = self.debouncer.settle(ticket) else {
            return SuggestionStep::Idle;
        };
        if value.trim().is_empty() {
            self.groups.clear();
            self.is_loading = false;
            return SuggestionStep::Cleared { cancelled: self.requests.cancel() };
        }

        let (token, superseded) = self.requests.begin();
        self.is_loading = true;
        SuggestionStep::Fetch(SuggestionDispatch {
            token,
            request: SearchRequest::for_suggestions(&value),
            superseded,
        })
    }

    /// Returns whether the outcome was applied.
    pub fn complete(&mut self, token: RequestToken, outcome: Result<SearchResponse, SearchApiError>) -> bool {
        if matches!(outcome, Err(SearchApiError::Cancelled)) {
            return false;
        }
        if !self.requests.finish(token) {
            return false;
        }
        self.groups = match outcome {
            Ok(response) => group_by_kind(response.results),
            Err(_) => Vec::new(),
        };
        self.is_loading = false;
        true
    }

    pub fn teardown(&mut self) -> Option<RequestToken> {
        self.debouncer.cancel();
        self.requests.cancel()
    }
}
