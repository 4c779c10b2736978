//! Runtime configuration read from the environment.

use anyhow::Context;
use common::search_const::DEFAULT_SEARCH_API_URL;
use reqwest::Url;


pub const SEARCH_API_URL_ENV: &str = "SEARCH_API_URL";

#[derive(Debug, Clone, PartialEq)]
pub struct SearchApiConfig {
    pub endpoint: Url,
}

impl SearchApiConfig {
    /// Reads `SEARCH_API_URL`, falling back to the public search service.
    pub fn from_env() -> anyhow::Result<Self> {
        let endpoint = std::env::var(SEARCH_API_URL_ENV).unwrap_or(DEFAULT_SEARCH_API_URL.to_string());
        Self::from_url(&endpoint).with_context(|| format!("{SEARCH_API_URL_ENV} is not usable"))
    }

    pub fn from_url(endpoint: &str) -> anyhow::Result<Self> {
        let endpoint = Url::parse(endpoint).with_context(|| format!("Failed to parse search endpoint {endpoint:?}"))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            anyhow::bail!("Search endpoint must be http or https, got {}", endpoint.scheme());
        }
        Ok(Self { endpoint })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_parses() {
        let config = SearchApiConfig::from_url(DEFAULT_SEARCH_API_URL).unwrap();
        assert_eq!(config.endpoint.path(), "/search");
    }

    #[test]
    fn rejects_bad_endpoints() {
        assert!(SearchApiConfig::from_url("not a url").is_err());
        assert!(SearchApiConfig::from_url("ftp://example.com/search").is_err());
    }
}
