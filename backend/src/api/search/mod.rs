//! Product search API client and server entry points.

mod search_client;
pub use search_client::SearchApiClient;

mod search_products;
pub use search_products::search_products;
