//! Search endpoint for product result pages and suggestions.

use common::{search_query::SearchRequest, search_result::SearchResponse};

use crate::api::search::SearchApiClient;


/// Runs one search against the configured service.
///
/// The returned error wraps a [`common::search_error::SearchApiError`] when the
/// service itself failed, so callers can recover the HTTP status.
pub async fn search_products(request: SearchRequest) -> anyhow::Result<SearchResponse> {
    let client = SearchApiClient::from_env()?;
    // an abandoned server call is dropped, which aborts the HTTP exchange with it
    let response = client.search(&request).await?;
    Ok(response)
}
