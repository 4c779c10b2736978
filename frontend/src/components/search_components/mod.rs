pub mod product_card;
pub mod search_autocomplete;
pub mod search_filters_panel;
pub mod search_ordering;
pub mod search_pagination;
pub mod search_results_grid;
pub mod search_toolbar;
