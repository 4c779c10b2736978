//! State of the product search page.
//!
//! [`SearchController`] does no I/O. Every input that produces a new
//! combination of (debounced query, filters, order, page) returns a
//! [`SearchDispatch`] which the caller must execute, aborting the request
//! named in `superseded` if there is one, and report back through
//! [`SearchController::complete`]. Completions of anything but the latest
//! dispatch are discarded, so results always belong to the last trigger even
//! when responses arrive out of order.

use crate::debounce::{DebounceTicket, Debouncer};
use crate::request_tracker::{RequestToken, RequestTracker};
use crate::search_const::{PAGE_SIZE, SEARCH_DEBOUNCE_MS};
use crate::search_error::SearchApiError;
use crate::search_filters::FilterSet;
use crate::search_query::{SearchQueryState, SearchRequest};
use crate::search_result::{SearchResponse, SearchResult};


/// A search the caller has to run on behalf of the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchDispatch {
    pub token: RequestToken,
    pub request: SearchRequest,
    /// Still in flight and no longer wanted.
    pub superseded: Option<RequestToken>,
}

#[derive(Debug)]
pub struct SearchController {
    query_text: String,
    debounced_query: String,
    filters: FilterSet,
    order_by: String,
    page: u64,

    debouncer: Debouncer<String>,
    requests: RequestTracker,
    last_committed: Option<SearchQueryState>,

    results: Vec<SearchResult>,
    count: u64,
    is_loading: bool,
    error: Option<SearchApiError>,
}

impl SearchController {
    pub fn new(initial: SearchQueryState) -> Self {
        Self::with_debounce(initial, SEARCH_DEBOUNCE_MS)
    }

    pub fn with_debounce(initial: SearchQueryState, debounce_ms: u32) -> Self {
        Self {
            debounced_query: initial.query_text.clone(),
            query_text: initial.query_text,
            filters: initial.filters,
            order_by: initial.order_by,
            page: initial.page.max(1),
            debouncer: Debouncer::new(debounce_ms),
            requests: RequestTracker::new(),
            last_committed: None,
            results: Vec::new(),
            count: 0,
            is_loading: false,
            error: None,
        }
    }

    /// Raw input text, updated on every keystroke.
    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn debounced_query(&self) -> &str {
        &self.debounced_query
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn order_by(&self) -> &str {
        &self.order_by
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        PAGE_SIZE
    }

    /// Results of the last successful search. Kept while a newer one loads.
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> bool {
        self.error.is_some()
    }

    pub fn last_error(&self) -> Option<&SearchApiError> {
        self.error.as_ref()
    }

    /// State as it should appear in the address bar: the debounced query,
    /// not the raw input.
    pub fn url_state(&self) -> SearchQueryState {
        SearchQueryState {
            query_text: self.debounced_query.clone(),
            filters: self.filters.clone(),
            order_by: self.order_by.clone(),
            page: self.page,
        }
    }

    /// Issues the search for the initial state, keeping its page.
    pub fn start(&mut self) -> Option<SearchDispatch> {
        self.commit()
    }

    /// Echoes the text immediately; the search waits for the returned ticket
    /// to be settled through [`SearchController::settle_query`].
    pub fn set_query(&mut self, text: impl Into<String>) -> DebounceTicket {
        let text = text.into();
        self.query_text = text.clone();
        self.debouncer.push(text)
    }

    pub fn settle_query(&mut self, ticket: DebounceTicket) -> Option<SearchDispatch> {
        let settled = self.debouncer.settle(ticket)?;
        if settled == self.debounced_query {
            return None;
        }
        self.debounced_query = settled;
        self.page = 1;
        self.commit()
    }

    pub fn set_filters(&mut self, filters: FilterSet) -> Option<SearchDispatch> {
        if filters == self.filters {
            return None;
        }
        self.filters = filters;
        self.page = 1;
        self.commit()
    }

    /// Applies an in-place edit, e.g. toggling one checkbox.
    pub fn update_filters(&mut self, edit: impl FnOnce(&mut FilterSet)) -> Option<SearchDispatch> {
        let mut filters = self.filters.clone();
        edit(&mut filters);
        self.set_filters(filters)
    }

    pub fn set_order_by(&mut self, order_by: impl Into<String>) -> Option<SearchDispatch> {
        let order_by = order_by.into();
        if order_by == self.order_by {
            return None;
        }
        self.order_by = order_by;
        self.page = 1;
        self.commit()
    }

    pub fn set_page(&mut self, page: u64) -> Option<SearchDispatch> {
        let page = page.max(1);
        if page == self.page {
            return None;
        }
        self.page = page;
        self.commit()
    }

    /// Replaces the whole state after navigation that did not originate here
    /// (back/forward, a pasted link). Query text skips the debounce and the
    /// page is taken as given.
    pub fn apply_external(&mut self, state: SearchQueryState) -> Option<SearchDispatch> {
        self.debouncer.cancel();
        self.debounced_query = state.query_text.clone();
        self.query_text = state.query_text;
        self.filters = state.filters;
        self.order_by = state.order_by;
        self.page = state.page.max(1);
        self.commit()
    }

    /// Re-issues the current search even though nothing changed.
    pub fn refresh(&mut self) -> SearchDispatch {
        self.last_committed = Some(self.url_state());
        self.dispatch()
    }

    /// Records the outcome of a dispatched search. Returns whether it was
    /// applied; cancelled and superseded outcomes are dropped untouched.
    pub fn complete(&mut self, token: RequestToken, outcome: Result<SearchResponse, SearchApiError>) -> bool {
        if matches!(outcome, Err(SearchApiError::Cancelled)) {
            return false;
        }
        if !self.requests.finish(token) {
            return false;
        }
        match outcome {
            Ok(response) => {
                self.results = response.results;
                self.count = response.count;
                self.error = None;
            }
            Err(error) => {
                self.results.clear();
                self.count = 0;
                self.error = Some(error);
            }
        }
        self.is_loading = false;
        true
    }

    /// Drops pending input and returns the request that must be aborted.
    pub fn teardown(&mut self) -> Option<RequestToken> {
        self.debouncer.cancel();
        self.requests.cancel()
    }

    fn commit(&mut self) -> Option<SearchDispatch> {
        let snapshot = self.url_state();
        if self.last_committed.as_ref() == Some(&snapshot) {
            return None;
        }
        self.last_committed = Some(snapshot);
        Some(self.dispatch())
    }

    fn dispatch(&mut self) -> SearchDispatch {
        let (token, superseded) = self.requests.begin();
        self.is_loading = true;
        self.error = None;
        SearchDispatch {
            token,
            request: SearchRequest::for_page(&self.debounced_query, &self.filters, &self.order_by, self.page),
            superseded,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::search_filters::{ArrayFilterKey, RangeFilterKey};
    use crate::search_params;
    use crate::search_result::SearchResultKind;
    use crate::search_result::test_support::response;

    fn started(initial: SearchQueryState) -> (SearchController, SearchDispatch) {
        let mut controller = SearchController::new(initial);
        let dispatch = controller.start().expect("initial search");
        (controller, dispatch)
    }

    #[test]
    fn successful_search_exposes_results() {
        let (mut controller, dispatch) = started(SearchQueryState::from_query_text("NDQ"));
        assert!(controller.is_loading());
        assert_eq!(dispatch.request.search_text.as_deref(), Some("NDQ"));

        let applied = controller.complete(dispatch.token, Ok(response(&[("NDQ", SearchResultKind::Etf)], 1)));
        assert!(applied);
        assert_eq!(controller.results().len(), 1);
        assert_eq!(controller.count(), 1);
        assert!(!controller.is_loading());
        assert!(!controller.error());
    }

    #[test]
    fn http_failure_empties_results_and_flags_error() {
        let (mut controller, first) = started(SearchQueryState::default());
        controller.complete(first.token, Ok(response(&[("A200", SearchResultKind::Etf)], 40)));

        let second = controller.set_page(2).unwrap();
        controller.complete(second.token, Err(SearchApiError::Http { status: 500 }));
        assert!(controller.results().is_empty());
        assert_eq!(controller.count(), 0);
        assert!(controller.error());
        assert!(!controller.is_loading());
        assert_eq!(controller.last_error(), Some(&SearchApiError::Http { status: 500 }));

        // still usable afterwards
        let third = controller.set_page(3).unwrap();
        assert!(!controller.error());
        controller.complete(third.token, Ok(response(&[("QLTY", SearchResultKind::Etf)], 40)));
        assert_eq!(controller.results().len(), 1);
    }

    #[test]
    fn late_response_of_superseded_request_is_ignored() {
        let (mut controller, r1) = started(SearchQueryState::default());
        let r2 = controller.set_order_by("fund_size.desc").unwrap();
        assert_eq!(r2.superseded, Some(r1.token));

        assert!(controller.complete(r2.token, Ok(response(&[("R2", SearchResultKind::Etf)], 1))));
        assert!(!controller.complete(r1.token, Ok(response(&[("R1", SearchResultKind::Equity)], 9))));

        assert_eq!(controller.results()[0].symbol, "R2");
        assert_eq!(controller.count(), 1);
    }

    #[test]
    fn cancelled_outcome_touches_nothing() {
        let (mut controller, first) = started(SearchQueryState::default());
        controller.complete(first.token, Ok(response(&[("VAS", SearchResultKind::Etf)], 1)));

        let second = controller.set_page(2).unwrap();
        assert!(!controller.complete(second.token, Err(SearchApiError::Cancelled)));
        assert!(controller.is_loading());
        assert!(!controller.error());
        assert_eq!(controller.results()[0].symbol, "VAS");
    }

    #[test]
    fn rapid_typing_issues_one_request_for_last_text() {
        let (mut controller, _) = started(SearchQueryState::default());
        let tickets = [controller.set_query("N"), controller.set_query("ND"), controller.set_query("NDQ")];
        assert_eq!(controller.query_text(), "NDQ");
        assert_eq!(controller.debounced_query(), "");

        let dispatches: Vec<SearchDispatch> = tickets.iter().filter_map(|t| controller.settle_query(*t)).collect();
        assert_eq!(dispatches.len(), 1);
        assert_eq!(dispatches[0].request.search_text.as_deref(), Some("NDQ"));
    }

    #[test]
    fn typing_back_to_the_same_text_issues_nothing() {
        let (mut controller, _) = started(SearchQueryState::from_query_text("cash"));
        controller.set_query("cashx");
        let ticket = controller.set_query("cash");
        assert_eq!(controller.settle_query(ticket), None);
    }

    #[test]
    fn filter_change_on_page_three_requests_page_one() {
        let initial = search_params::decode("page=3");
        let (mut controller, first) = started(initial);
        assert_eq!(first.request.from, 3);
        assert_eq!(controller.page(), 3);

        let dispatch = controller
            .update_filters(|f| f.toggle_value(ArrayFilterKey::Kind, "etf"))
            .unwrap();
        assert_eq!(controller.page(), 1);
        assert_eq!(dispatch.request.from, 1);
        assert_eq!(dispatch.request.kind, Some(vec!["etf".to_string()]));
    }

    #[test]
    fn query_and_order_changes_reset_page() {
        let (mut controller, _) = started(SearchQueryState { page: 5, ..SearchQueryState::default() });
        let dispatch = controller.set_order_by("management_fee.asc").unwrap();
        assert_eq!(dispatch.request.from, 1);

        controller.set_page(4);
        let ticket = controller.set_query("bonds");
        let dispatch = controller.settle_query(ticket).unwrap();
        assert_eq!(dispatch.request.from, 1);
        assert_eq!(controller.page(), 1);
    }

    #[test]
    fn identical_state_is_not_searched_twice() {
        let filters = FilterSet::new().with_range(RangeFilterKey::FundSize, Some("100"), None);
        let (mut controller, _) = started(SearchQueryState { filters: filters.clone(), ..SearchQueryState::default() });
        assert_eq!(controller.set_filters(filters), None);
        assert_eq!(controller.set_order_by(""), None);
        assert_eq!(controller.set_page(0), None);
        assert_eq!(controller.start(), None);
    }

    #[test]
    fn results_stay_visible_while_loading() {
        let (mut controller, first) = started(SearchQueryState::default());
        controller.complete(first.token, Ok(response(&[("HACK", SearchResultKind::Etf)], 1)));
        controller.set_page(2);
        assert!(controller.is_loading());
        assert_eq!(controller.results().len(), 1);
    }

    #[test]
    fn external_navigation_keeps_its_page_and_skips_debounce() {
        let (mut controller, _) = started(SearchQueryState::default());
        let pending = controller.set_query("typed");

        let target = search_params::decode("q=gold&kind=etf&page=3");
        let dispatch = controller.apply_external(target.clone()).unwrap();
        assert_eq!(dispatch.request.from, 3);
        assert_eq!(controller.url_state(), target);
        assert_eq!(controller.query_text(), "gold");
        // the keystroke typed before navigating is dropped
        assert_eq!(controller.settle_query(pending), None);
    }

    #[test]
    fn teardown_cancels_outstanding_request() {
        let (mut controller, first) = started(SearchQueryState::default());
        assert_eq!(controller.teardown(), Some(first.token));
        assert!(!controller.complete(first.token, Ok(response(&[("X", SearchResultKind::Etf)], 1))));
        assert!(controller.results().is_empty());
    }

    #[test]
    fn refresh_reissues_the_current_search() {
        let (mut controller, first) = started(SearchQueryState::default());
        controller.complete(first.token, Err(SearchApiError::Network { message: "offline".into() }));
        let retry = controller.refresh();
        assert_eq!(retry.request, first.request);
        assert_ne!(retry.token, first.token);
        assert!(controller.is_loading());
        assert!(!controller.error());
    }
}
