//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod search_const;
pub mod search_filters;
pub mod search_query;
pub mod search_result;
pub mod search_error;
pub mod search_params;
pub mod text_highlight;
pub mod product_format;
pub mod pagination;
pub mod debounce;
pub mod request_tracker;
pub mod search_controller;
pub mod suggestion_controller;
pub mod url_sync;
