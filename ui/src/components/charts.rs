use dioxus::prelude::*;

use crate::core::chart::{
    self, build_heatmap, chart_points, clamp_percent, max_with_floor, polyline_points,
    ring_offset, viewbox_height, ActivityWeek, CHART_VIEWPORT_WIDTH, RING_CIRCUMFERENCE,
};
use crate::core::format::{format_activity, format_percent};
use crate::i18n::weekday_labels;

/// Circular progress indicator with the percentage in the middle.
#[component]
pub fn ProgressRing(percent: f64) -> Element {
    let offset = format_activity(ring_offset(percent));
    let circumference = format_activity(RING_CIRCUMFERENCE);
    let radius = format_activity(chart::RING_RADIUS);
    let label = format_percent(clamp_percent(percent));

    rsx! {
        div { class: "progress-ring",
            svg { class: "progress-ring__svg", view_box: "0 0 100 100",
                circle {
                    class: "progress-ring__track",
                    cx: "50",
                    cy: "50",
                    r: "{radius}",
                    fill: "none",
                    stroke: "#1a1a1a",
                    stroke_width: "10",
                }
                circle {
                    class: "progress-ring__value",
                    cx: "50",
                    cy: "50",
                    r: "{radius}",
                    fill: "none",
                    stroke: "#00CC00",
                    stroke_width: "10",
                    stroke_dasharray: "{circumference}",
                    stroke_dashoffset: "{offset}",
                    stroke_linecap: "round",
                    transform: "rotate(-90 50 50)",
                }
            }
            span { class: "progress-ring__label", "{label}" }
        }
    }
}

#[component]
pub fn ProgressBar(percent: f64) -> Element {
    let width = format_activity(clamp_percent(percent));

    rsx! {
        div {
            class: "progress-bar",
            role: "progressbar",
            aria_valuemin: "0",
            aria_valuemax: "100",
            aria_valuenow: "{width}",
            div { class: "progress-bar__fill", style: "width: {width}%" }
        }
    }
}

/// Line chart of one value per weekday, scaled to the largest value.
#[component]
pub fn TrendChart(values: Vec<f64>, caption: String) -> Element {
    let max_value = max_with_floor(&values);
    let points = chart_points(&values, CHART_VIEWPORT_WIDTH, max_value);
    let polyline = polyline_points(&points);
    let view_box = format!(
        "0 0 {} {}",
        format_activity(CHART_VIEWPORT_WIDTH),
        format_activity(viewbox_height(max_value))
    );
    let dots: Vec<(String, String)> = points
        .iter()
        .map(|p| (format_activity(p.x), format_activity(p.y)))
        .collect();
    let labels = weekday_labels();

    rsx! {
        div { class: "trend-chart",
            svg { class: "trend-chart__svg", view_box: "{view_box}",
                polyline {
                    fill: "none",
                    stroke: "#00CC00",
                    stroke_width: "2",
                    points: "{polyline}",
                }
                for (index, (cx, cy)) in dots.into_iter().enumerate() {
                    circle { key: "{index}", cx: "{cx}", cy: "{cy}", r: "3", fill: "#00CC00" }
                }
            }
            div { class: "trend-chart__days",
                for label in labels.iter() {
                    span { "{label}" }
                }
            }
            p { class: "trend-chart__caption", "{caption}" }
        }
    }
}

/// Participants × weekdays grid shaded by activity intensity.
#[component]
pub fn ActivityHeatmap(rows: Vec<(String, ActivityWeek)>, caption: String) -> Element {
    let grid = build_heatmap(&rows);
    let labels = weekday_labels();

    let rendered: Vec<(String, Vec<(String, String)>)> = grid
        .into_iter()
        .map(|row| {
            let cells = row
                .cells
                .iter()
                .map(|cell| {
                    (
                        format!("background: {}; border-radius: 4px", cell.background()),
                        cell.label().unwrap_or_default(),
                    )
                })
                .collect();
            (row.label, cells)
        })
        .collect();

    rsx! {
        div { class: "heatmap",
            div { class: "heatmap__row heatmap__row--header",
                span { class: "heatmap__name" }
                for label in labels.iter() {
                    span { class: "heatmap__day", "{label}" }
                }
            }
            for (name, cells) in rendered.into_iter() {
                div { class: "heatmap__row", key: "{name}",
                    span { class: "heatmap__name", "{name}" }
                    for (index, (style, text)) in cells.into_iter().enumerate() {
                        div { class: "heatmap__cell", key: "{index}", style: "{style}", "{text}" }
                    }
                }
            }
            p { class: "heatmap__caption", "{caption}" }
        }
    }
}
