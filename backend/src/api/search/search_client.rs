//! HTTP client for the search service.

use common::{
    search_error::SearchApiError,
    search_query::SearchRequest,
    search_result::SearchResponse,
};
use reqwest::Url;
use tracing::{info, warn};

use crate::config::SearchApiConfig;


#[derive(Debug, Clone)]
pub struct SearchApiClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl SearchApiClient {
    pub fn new(config: SearchApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint,
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(SearchApiConfig::from_env()?))
    }

    /// POSTs `request` as JSON and decodes the paginated response.
    ///
    /// There are no retries. Dropping the returned future abandons the HTTP
    /// exchange, which is how a superseded search is cancelled.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchApiError> {
        let t0 = std::time::Instant::now();
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        if !status.is_success() {
            warn!("search service answered {} for from={} text={:?}", status, request.from, request.search_text);
            return Err(SearchApiError::Http { status: status.as_u16() });
        }

        let body = response.text().await.map_err(network_error)?;
        let parsed: SearchResponse = serde_json::from_str(&body).map_err(|e| SearchApiError::Decode { message: e.to_string() })?;
        let dt_ms = t0.elapsed().as_millis();
        info!(
            "search ok: from={} text={:?} -> {} of {} results in {}ms",
            request.from,
            request.search_text,
            parsed.results.len(),
            parsed.count,
            dt_ms
        );
        Ok(parsed)
    }
}

fn network_error(e: reqwest::Error) -> SearchApiError {
    SearchApiError::Network { message: e.to_string() }
}
