//! Runs a [`SearchController`] on Dioxus tasks.
//!
//! The controller decides what to search for; this module owns the timers and
//! the in-flight request. A superseded request has its task cancelled, which
//! drops the server call, and the controller discards its outcome anyway if
//! it still arrives.

use common::{
    search_controller::{SearchController, SearchDispatch},
    search_filters::FilterSet,
    search_query::SearchQueryState,
};
use dioxus::{core::Task, logger::tracing, prelude::*};
use gloo_timers::future::TimeoutFuture;

use crate::api::search_api::{into_search_error, search_products};


#[derive(Clone, Copy)]
pub struct SearchHandle {
    pub controller: Signal<SearchController>,
    debounce_task: Signal<Option<Task>>,
    in_flight: Signal<Option<Task>>,
}

/// Creates the search state for the lifetime of the calling component and
/// issues the initial search once mounted.
pub fn use_search(initial: impl FnOnce() -> SearchQueryState) -> SearchHandle {
    let controller = use_signal(move || SearchController::new(initial()));
    let debounce_task = use_signal(|| None);
    let in_flight = use_signal(|| None);
    let handle = SearchHandle { controller, debounce_task, in_flight };

    use_effect(move || handle.start());
    use_drop(move || handle.teardown());

    handle
}

impl SearchHandle {
    pub fn set_query(mut self, text: String) {
        let ticket = self.controller.write().set_query(text);
        if let Some(task) = self.debounce_task.write().take() {
            task.cancel();
        }
        let mut this = self;
        let task = spawn(async move {
            TimeoutFuture::new(ticket.delay_ms()).await;
            let dispatch = this.controller.write().settle_query(ticket);
            this.run(dispatch);
        });
        self.debounce_task.set(Some(task));
    }

    pub fn set_filters(mut self, filters: FilterSet) {
        let dispatch = self.controller.write().set_filters(filters);
        self.run(dispatch);
    }

    pub fn update_filters(mut self, edit: impl FnOnce(&mut FilterSet)) {
        let dispatch = self.controller.write().update_filters(edit);
        self.run(dispatch);
    }

    pub fn set_order_by(mut self, order_by: String) {
        let dispatch = self.controller.write().set_order_by(order_by);
        self.run(dispatch);
    }

    pub fn set_page(mut self, page: u64) {
        let dispatch = self.controller.write().set_page(page);
        self.run(dispatch);
    }

    /// Overwrites the state after back/forward or a pasted link.
    pub fn apply_external(mut self, state: SearchQueryState) {
        if let Some(task) = self.debounce_task.write().take() {
            task.cancel();
        }
        let dispatch = self.controller.write().apply_external(state);
        self.run(dispatch);
    }

    pub fn refresh(mut self) {
        let dispatch = self.controller.write().refresh();
        self.run(Some(dispatch));
    }

    fn start(mut self) {
        let dispatch = self.controller.write().start();
        self.run(dispatch);
    }

    fn run(mut self, dispatch: Option<SearchDispatch>) {
        let Some(SearchDispatch { token, request, superseded }) = dispatch else {
            return;
        };
        if let Some(task) = self.in_flight.write().take() {
            if let Some(superseded) = superseded {
                tracing::debug!("search {} superseded by {}", superseded.id(), token.id());
            }
            task.cancel();
        }

        tracing::debug!("search {}: from={} text={:?}", token.id(), request.from, request.search_text);
        let mut controller = self.controller;
        let task = spawn(async move {
            let outcome = search_products(request).await.map_err(into_search_error);
            if let Err(e) = &outcome {
                tracing::warn!("search {} failed: {e}", token.id());
            }
            controller.write().complete(token, outcome);
        });
        self.in_flight.set(Some(task));
    }

    fn teardown(mut self) {
        // the scope may already be releasing these signals
        if let Ok(mut task) = self.debounce_task.try_write() {
            if let Some(task) = task.take() {
                task.cancel();
            }
        }
        if let Ok(mut task) = self.in_flight.try_write() {
            if let Some(task) = task.take() {
                task.cancel();
            }
        }
        if let Ok(mut controller) = self.controller.try_write() {
            controller.teardown();
        }
    }
}
