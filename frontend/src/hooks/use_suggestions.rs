//! Runs a [`SuggestionController`] for the type-ahead.

use common::suggestion_controller::{SuggestionController, SuggestionDispatch, SuggestionStep};
use dioxus::{core::Task, logger::tracing, prelude::*};
use gloo_timers::future::TimeoutFuture;

use crate::api::search_api::{into_search_error, search_products};


#[derive(Clone, Copy)]
pub struct SuggestionHandle {
    pub controller: Signal<SuggestionController>,
    debounce_task: Signal<Option<Task>>,
    in_flight: Signal<Option<Task>>,
}

pub fn use_suggestions() -> SuggestionHandle {
    let controller = use_signal(SuggestionController::new);
    let debounce_task = use_signal(|| None);
    let in_flight = use_signal(|| None);
    let handle = SuggestionHandle { controller, debounce_task, in_flight };

    use_drop(move || handle.teardown());

    handle
}

impl SuggestionHandle {
    pub fn set_input(mut self, value: String) {
        let ticket = self.controller.write().set_input(value);
        if let Some(task) = self.debounce_task.write().take() {
            task.cancel();
        }
        let mut this = self;
        let task = spawn(async move {
            TimeoutFuture::new(ticket.delay_ms()).await;
            let step = this.controller.write().settle(ticket);
            match step {
                SuggestionStep::Idle => {}
                SuggestionStep::Cleared { .. } => this.abort_in_flight(),
                SuggestionStep::Fetch(dispatch) => this.run(dispatch),
            }
        });
        self.debounce_task.set(Some(task));
    }

    fn abort_in_flight(mut self) {
        if let Some(task) = self.in_flight.write().take() {
            task.cancel();
        }
    }

    fn run(mut self, dispatch: SuggestionDispatch) {
        let SuggestionDispatch { token, request, .. } = dispatch;
        self.abort_in_flight();

        let mut controller = self.controller;
        let task = spawn(async move {
            let outcome = search_products(request).await.map_err(into_search_error);
            if let Err(e) = &outcome {
                tracing::warn!("suggestions {} failed: {e}", token.id());
            }
            controller.write().complete(token, outcome);
        });
        self.in_flight.set(Some(task));
    }

    fn teardown(mut self) {
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
