//! Formatting helpers for presenting challenge data.

use time::{macros::format_description, Date};

pub fn format_percent(value: f64) -> String {
    format!("{value:.0}%")
}

/// Activity values and SVG coordinates keep up to two decimals; whole
/// numbers print bare (`200`, not `200.00`).
pub fn format_activity(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0 + 0.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded}")
    }
}

/// `January 2023`
pub fn format_month_year(date: Date) -> String {
    date.format(&format_description!("[month repr:long] [year]"))
        .unwrap_or_default()
}

/// `Dec 2024`
pub fn format_month_short(date: Date) -> String {
    date.format(&format_description!("[month repr:short] [year]"))
        .unwrap_or_default()
}

/// `2025-03-01`, the shape a date input emits.
pub fn format_iso_date(date: Date) -> String {
    date.format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}
