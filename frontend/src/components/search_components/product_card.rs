//! Result grid card for one ETF or stock.

use dioxus::prelude::*;

use common::{
    product_format::{format_millions, format_percentage, format_ratio, format_return, return_direction},
    search_result::SearchResult,
};


#[component]
pub fn ProductCard(product: ReadSignal<SearchResult>) -> Element {
    let product = product.read();
    let badge = product.kind.badge();
    let subtitle = [Some(product.exchange.as_str()), product.issuer.as_deref().or(product.sector.as_deref())]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" · ");

    rsx! {
        div {
            class: "x-product-card",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 10px;",
                if let Some(logo) = product.logo.clone() {
                    img { src: "{logo}", alt: "{product.symbol}", style: "width: 36px; height: 36px; border-radius: 8px;" }
                }
                div {
                    style: "display: flex; flex-direction: column; min-width: 0;",
                    span { style: "font-size: 18px; font-weight: 600; color: #0F172A;", "{product.symbol}" }
                    span { class: "x-ellipsis", style: "font-size: 14px; color: #4B5563;", "{product.display_name}" }
                }
                div { style: "flex-grow: 1;" }
                span { class: "x-badge", "{badge}" }
            }

            if !subtitle.is_empty() {
                div { style: "font-size: 13px; color: #6B7280;", "{subtitle}" }
            }

            if let Some(description) = product.flagship_description_short.clone().filter(|_| product.is_flagship_fund) {
                div { style: "font-size: 13px; color: #374151; line-height: 1.4;", "{description}" }
            }

            div {
                class: "x-metric-grid",
                ReturnMetric { label: "1Y return", raw: product.one_year_return.clone() }
                ReturnMetric { label: "5Y return", raw: product.five_year_return.clone() }
                if product.is_etf() {
                    Metric { label: "Fund size", value: format_millions(product.fund_size.as_deref()) }
                    Metric { label: "Mgmt fee", value: format_percentage(product.management_fee.as_deref()) }
                } else {
                    Metric { label: "Market cap", value: format_millions(product.market_capitalisation.as_deref()) }
                    Metric { label: "P/B ratio", value: format_ratio(product.price_to_book_ratio.as_deref()) }
                }
            }
        }
    }
}

#[component]
fn Metric(label: String, value: String) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 2px;",
            span { style: "font-size: 12px; color: #6B7280;", "{label}" }
            span { style: "font-size: 15px; font-weight: 500; color: #111827;", "{value}" }
        }
    }
}

#[component]
fn ReturnMetric(label: String, raw: Option<String>) -> Element {
    let color = match return_direction(raw.as_deref()) {
        Some(true) => "#15803D",
        Some(false) => "#B91C1C",
        None => "#111827",
    };
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 2px;",
            span { style: "font-size: 12px; color: #6B7280;", "{label}" }
            span { style: "font-size: 15px; font-weight: 500; color: {color};", "{format_return(raw.as_deref())}" }
        }
    }
}

/// Grey placeholder with the card's footprint, shown while a page loads.
#[component]
pub fn ProductCardSkeleton() -> Element {
    rsx! {
        div {
            class: "x-product-card x-skeleton",
            div { class: "x-skeleton-line", style: "width: 40%; height: 20px;" }
            div { class: "x-skeleton-line", style: "width: 75%;" }
            div { class: "x-skeleton-line", style: "width: 55%;" }
            div { class: "x-skeleton-line", style: "width: 100%; height: 42px;" }
        }
    }
}
