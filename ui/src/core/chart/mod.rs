//! Derived data behind the challenge charts: trend lines, the progress ring and
//! heatmap intensity. Everything here is pure and total; numeric edge cases
//! resolve to safe defaults instead of errors.

pub mod activity;
pub mod heatmap;
pub mod ring;

pub use activity::{
    average_columns, average_per_day, chart_points, max_with_floor, polyline_points,
    viewbox_height, ActivityWeek, ChartPoint, DAYS_PER_WEEK,
};
pub use heatmap::{
    build_heatmap, cell_background, cell_opacity, grid_range, HeatmapCell, HeatmapRow,
};
pub use ring::{clamp_percent, ring_offset, stroke_offset, RING_CIRCUMFERENCE, RING_RADIUS};

/// Width of the trend chart viewBox.
pub const CHART_VIEWPORT_WIDTH: f64 = 200.0;

/// Vertical headroom added below the trend line.
pub const CHART_PADDING: f64 = 20.0;
