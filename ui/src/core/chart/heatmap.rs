//! Heatmap cell intensity.
//!
//! Each row is one participant's week; each cell is shaded green with an
//! opacity proportional to where its value sits between the grid minimum and
//! maximum.

use super::activity::ActivityWeek;
use crate::core::format::format_activity;

/// Normalized intensity of `value` within `[min, max]`.
///
/// A zero-width range renders at full intensity. The result is clamped to
/// `[0, 1]` so stray values never produce an invalid colour.
pub fn cell_opacity(value: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    if range == 0.0 || !range.is_finite() {
        return 1.0;
    }
    let opacity = 1.0 - (max - value) / range;
    if opacity.is_nan() {
        0.0
    } else {
        opacity.clamp(0.0, 1.0)
    }
}

/// Smallest and largest value across every cell, `None` for an empty grid.
pub fn grid_range(rows: &[ActivityWeek]) -> Option<(f64, f64)> {
    rows.iter()
        .flat_map(|week| week.values().iter().copied())
        .fold(None, |range, value| match range {
            None => Some((value, value)),
            Some((lo, hi)) => Some((lo.min(value), hi.max(value))),
        })
}

/// CSS background for a cell of the given opacity.
pub fn cell_background(opacity: f64) -> String {
    format!("rgba(0, 204, 0, {})", format_activity(opacity))
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapCell {
    pub value: f64,
    pub opacity: f64,
}

impl HeatmapCell {
    pub fn background(&self) -> String {
        cell_background(self.opacity)
    }

    /// Text shown inside the cell; idle days stay blank.
    pub fn label(&self) -> Option<String> {
        if self.value == 0.0 {
            None
        } else {
            Some(format_activity(self.value))
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapRow {
    pub label: String,
    pub cells: Vec<HeatmapCell>,
}

/// Shades every cell against the range of the whole grid.
pub fn build_heatmap(rows: &[(String, ActivityWeek)]) -> Vec<HeatmapRow> {
    let weeks: Vec<ActivityWeek> = rows.iter().map(|(_, week)| *week).collect();
    let Some((min, max)) = grid_range(&weeks) else {
        return Vec::new();
    };

    rows.iter()
        .map(|(label, week)| HeatmapRow {
            label: label.clone(),
            cells: week
                .values()
                .iter()
                .map(|&value| HeatmapCell {
                    value,
                    opacity: cell_opacity(value, min, max),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_reference_points() {
        assert_eq!(cell_opacity(5.0, 0.0, 10.0), 0.5);
        assert_eq!(cell_opacity(10.0, 0.0, 10.0), 1.0);
        assert_eq!(cell_opacity(0.0, 0.0, 10.0), 0.0);
    }

    #[test]
    fn flat_grid_renders_full_intensity() {
        assert_eq!(cell_opacity(3.0, 3.0, 3.0), 1.0);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(cell_opacity(15.0, 0.0, 10.0), 1.0);
        assert_eq!(cell_opacity(-5.0, 0.0, 10.0), 0.0);
    }

    #[test]
    fn range_spans_all_rows() {
        let rows = [
            ActivityWeek::new([5.0, 10.0, 15.0, 20.0, 10.0, 5.0, 0.0]),
            ActivityWeek::new([0.0, 5.0, 10.0, 25.0, 5.0, 5.0, 1.0]),
        ];
        assert_eq!(grid_range(&rows), Some((0.0, 25.0)));
        assert_eq!(grid_range(&[]), None);
    }

    #[test]
    fn heatmap_rows_keep_labels_and_shading() {
        let rows = vec![
            (
                "Alex".to_string(),
                ActivityWeek::new([5.0, 10.0, 15.0, 20.0, 10.0, 5.0, 0.0]),
            ),
            (
                "Sam".to_string(),
                ActivityWeek::new([0.0, 5.0, 10.0, 15.0, 5.0, 5.0, 0.0]),
            ),
        ];
        let grid = build_heatmap(&rows);
        assert_eq!(grid.len(), 2);
        assert_eq!(grid[0].label, "Alex");
        assert_eq!(grid[0].cells[3].opacity, 1.0);
        assert_eq!(grid[0].cells[3].background(), "rgba(0, 204, 0, 1)");
        assert_eq!(grid[1].cells[1].background(), "rgba(0, 204, 0, 0.25)");
        assert_eq!(grid[1].cells[0].label(), None);
        assert_eq!(grid[1].cells[1].label().as_deref(), Some("5"));
    }
}
