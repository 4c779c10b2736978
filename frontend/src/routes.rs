use dioxus::prelude::*;

use common::search_query::SearchQueryState;

use crate::components::navbar::Navbar;
use crate::data_definitions::url_query::UrlQuery;
use crate::pages::home_page::HomePage;
use crate::pages::search_page::SearchPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/search?:..query")]
    SearchPage { query: UrlQuery },

}

impl Route {
    pub fn search_page_from_state(state: &SearchQueryState) -> Self {
        Self::SearchPage {
            query: UrlQuery::from_state(state),
        }
    }

    pub fn search_page_from_text(text: &str) -> Self {
        Self::search_page_from_state(&SearchQueryState::from_query_text(text.trim()))
    }
}
