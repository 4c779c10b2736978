//! Top navigation bar component.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdHome, MdSearch};
use dioxus_free_icons::{Icon, IconShape};

use common::search_query::SearchQueryState;
use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;


/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display: flex;
                flex-direction: column;
                width: 100%;
                min-height: 100vh;
            ",

            div {
                id: "x-nav-topbar",
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 28px;
                    height: 60px;
                    padding: 0 24px;
                    background-color: #1C212D;
                    color: white;
                    flex-shrink: 0;
                ",

                NavbarLogo {}
                // empty space
                div { style: "flex-grow: 1;" }
                NavbarIconLinks {}
            }

            div {
                id: "x-page-container",
                style: "flex-grow: 1; min-height: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn NavbarLogo() -> Element {
    rsx! {
        Link {
            to: Route::HomePage {},
            style: "color: white; text-decoration: none; font-size: 20px; font-weight: 600; letter-spacing: -0.01em;",
            "Fund Finder"
        }
    }
}

#[component]
fn NavbarIconLinks() -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                gap: 20px;
                align-items: center;
            ",
            IconLink { to: Route::HomePage {}, icon: MdHome, label: "Home" }
            IconLink { to: Route::search_page_from_state(&SearchQueryState::default()), icon: MdSearch, label: "All Products" }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            class: "x-nav-link",
            style: "display: flex; align-items: center; gap: 6px; color: white; text-decoration: none; font-size: 15px;",
            Icon { icon: icon, style: "width: 22px; height: 22px;" }
            span { "{label}" }
        }
    }
}
