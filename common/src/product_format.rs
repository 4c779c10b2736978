//! Display formatting for product card figures.
//!
//! The search service sends figures as decimal strings; anything missing or
//! unparsable renders as an em dash placeholder.

pub const MISSING: &str = "—";

fn parse(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|r| r.trim().parse::<f64>().ok()).filter(|v| v.is_finite())
}

/// Amount given in millions: `$850M`, or `$6.5B` from a thousand million up.
pub fn format_millions(raw: Option<&str>) -> String {
    match parse(raw) {
        Some(value) if value >= 1000.0 => format!("${:.1}B", value / 1000.0),
        Some(value) => format!("${value:.0}M"),
        None => MISSING.to_string(),
    }
}

/// Signed percentage with two decimals, e.g. `+12.30%`.
pub fn format_return(raw: Option<&str>) -> String {
    match parse(raw) {
        Some(value) if value >= 0.0 => format!("+{value:.2}%"),
        Some(value) => format!("{value:.2}%"),
        None => MISSING.to_string(),
    }
}

pub fn format_percentage(raw: Option<&str>) -> String {
    match raw.filter(|r| !r.is_empty()) {
        Some(raw) => format!("{raw}%"),
        None => MISSING.to_string(),
    }
}

pub fn format_ratio(raw: Option<&str>) -> String {
    match parse(raw) {
        Some(value) => format!("{value:.2}"),
        None => MISSING.to_string(),
    }
}

/// `Some(true)` for gains, `Some(false)` for losses, `None` when unknown.
pub fn return_direction(raw: Option<&str>) -> Option<bool> {
    parse(raw).map(|value| value >= 0.0)
}
