//! Client API calls for search endpoints.

use common::{search_error::SearchApiError, search_query::SearchRequest, search_result::SearchResponse};
use dioxus::prelude::*;


#[server]
pub async fn search_products(input: SearchRequest) -> Result<SearchResponse, ServerFnError> {
    let x = backend::api::search::search_products(input).await;
    x.map_err(|e| {
        let code = e.downcast_ref::<SearchApiError>().map(SearchApiError::status_code).unwrap_or(500);
        ServerFnError::ServerError { message: e.to_string(), code, details: None }
    })
}

/// Folds a server function failure into the search error the controllers understand.
pub fn into_search_error(error: ServerFnError) -> SearchApiError {
    match error {
        ServerFnError::ServerError { code, .. } => SearchApiError::Http { status: code },
        other => SearchApiError::Network { message: other.to_string() },
    }
}
