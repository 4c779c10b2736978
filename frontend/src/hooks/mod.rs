pub mod use_search;
pub mod use_suggestions;
