//! Server-side renders of the chart components and a few catalog-backed views.
//! No router is mounted, so links fall back to plain anchors.

use dioxus::prelude::*;

use ui::components::{ActivityHeatmap, ProgressBar, ProgressRing, TrendChart};
use ui::core::chart::ActivityWeek;
use ui::views::{ChallengeDetail, Challenges, Profile};

fn render(root: fn() -> Element) -> String {
    ui::i18n::init();
    let mut dom = VirtualDom::new(root);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn half_ring() -> Element {
    rsx! { ProgressRing { percent: 50.0 } }
}

fn overfull_bar() -> Element {
    rsx! { ProgressBar { percent: 140.0 } }
}

fn weekly_trend() -> Element {
    rsx! { TrendChart { values: vec![1.0, 2.5, 4.0, 3.0], caption: "trend".to_string() } }
}

fn two_row_heatmap() -> Element {
    rsx! {
        ActivityHeatmap {
            rows: vec![
                ("Alex".to_string(), ActivityWeek::new([5.0, 10.0, 15.0, 20.0, 10.0, 5.0, 0.0])),
                ("Sam".to_string(), ActivityWeek::new([0.0, 5.0, 10.0, 15.0, 5.0, 5.0, 0.0])),
            ],
            caption: "heat".to_string(),
        }
    }
}

fn dashboard() -> Element {
    rsx! { Challenges {} }
}

fn coding_streak() -> Element {
    rsx! { ChallengeDetail { id: "3".to_string() } }
}

fn bogus_detail() -> Element {
    rsx! { ChallengeDetail { id: "not-a-number".to_string() } }
}

fn profile_page() -> Element {
    rsx! { Profile {} }
}

#[test]
fn ring_renders_half_offset() {
    let html = render(half_ring);
    assert!(html.contains("stroke-dasharray=\"283\""), "{html}");
    assert!(html.contains("stroke-dashoffset=\"141.5\""), "{html}");
    assert!(html.contains("50%"), "{html}");
}

#[test]
fn bar_width_is_clamped() {
    let html = render(overfull_bar);
    assert!(html.contains("width: 100%"), "{html}");
    assert!(!html.contains("140"), "{html}");
}

#[test]
fn trend_chart_emits_polyline() {
    let html = render(weekly_trend);
    assert!(html.contains("0,3 66.67,1.5 133.33,0 200,1"), "{html}");
    assert!(html.contains("viewBox=\"0 0 200 24\""), "{html}");
}

#[test]
fn heatmap_shades_against_grid_range() {
    let html = render(two_row_heatmap);
    assert!(html.contains("rgba(0, 204, 0, 1)"), "{html}");
    assert!(html.contains("rgba(0, 204, 0, 0.25)"), "{html}");
    assert!(html.contains("rgba(0, 204, 0, 0)"), "{html}");
    assert!(html.contains("Alex") && html.contains("Sam"), "{html}");
}

#[test]
fn dashboard_lists_viewer_challenges() {
    let html = render(dashboard);
    assert!(html.contains("Morning Meditation"), "{html}");
    assert!(html.contains("Coding Streak"), "{html}");
    assert!(html.contains("href=\"/challenge/3\""), "{html}");
    assert!(!html.contains("Plant-Based Week"), "{html}");
}

#[test]
fn detail_shows_viewer_column() {
    let html = render(coding_streak);
    assert!(html.contains("Coding Streak"), "{html}");
    assert!(html.contains("page-detail__columns"), "{html}");
    assert!(html.contains("log-form"), "{html}");
    assert!(html.contains("Day 2: 1h"), "{html}");
}

#[test]
fn unparseable_id_renders_not_found() {
    let html = render(bogus_detail);
    assert!(html.contains("page-detail__missing"), "{html}");
    assert!(!html.contains("page-detail__columns"), "{html}");
}

#[test]
fn profile_shows_stats_and_history() {
    let html = render(profile_page);
    assert!(html.contains("@QuantumExplorer"), "{html}");
    assert!(html.contains("January 2023"), "{html}");
    assert!(html.contains("Dec 2024"), "{html}");
}
