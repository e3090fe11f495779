//! Weekly activity aggregation and line-chart geometry.
//!
//! Every participant carries one value per weekday (Mon–Sun). The trend charts
//! plot either a single participant's week or the per-day mean across the
//! whole group, inverted so larger values sit higher in the SVG viewport.

use serde::{Deserialize, Serialize};

use super::CHART_PADDING;
use crate::core::format::format_activity;

/// Number of slots in an activity sequence (Mon–Sun).
pub const DAYS_PER_WEEK: usize = 7;

/// A participant's activity for one week, one value per weekday.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ActivityWeek(pub [f64; DAYS_PER_WEEK]);

impl ActivityWeek {
    pub const fn new(values: [f64; DAYS_PER_WEEK]) -> Self {
        Self(values)
    }

    pub const fn zero() -> Self {
        Self([0.0; DAYS_PER_WEEK])
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }
}

/// A vertex of a trend chart in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

/// Column-wise arithmetic mean of equal-length rows.
///
/// The output is as wide as the first row; a shorter row contributes nothing
/// to the columns it lacks. No rows yields an empty vector.
pub fn average_columns(rows: &[&[f64]]) -> Vec<f64> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };

    let mut totals = vec![0.0; first.len()];
    for row in rows {
        for (total, value) in totals.iter_mut().zip(row.iter()) {
            *total += value;
        }
    }

    let count = rows.len() as f64;
    totals.into_iter().map(|total| total / count).collect()
}

/// Per-day mean across all weeks; all zeros when there are no weeks.
pub fn average_per_day(weeks: &[ActivityWeek]) -> ActivityWeek {
    let rows: Vec<&[f64]> = weeks.iter().map(ActivityWeek::values).collect();
    let mut averaged = ActivityWeek::zero();
    for (slot, value) in averaged.0.iter_mut().zip(average_columns(&rows)) {
        *slot = value;
    }
    averaged
}

/// Largest value in the sequence, never below 1 so it can serve as a scale.
pub fn max_with_floor(values: &[f64]) -> f64 {
    values.iter().copied().fold(1.0, f64::max)
}

/// Maps each value to a point spread evenly across `viewport_width`.
///
/// `y` is `max_value - value`, so SVG's downward y-axis plots larger values
/// higher. A single value is pinned to `x = 0`.
pub fn chart_points(values: &[f64], viewport_width: f64, max_value: f64) -> Vec<ChartPoint> {
    match values.len() {
        0 => Vec::new(),
        1 => vec![ChartPoint {
            x: 0.0,
            y: max_value - values[0],
        }],
        len => {
            let last = (len - 1) as f64;
            values
                .iter()
                .enumerate()
                .map(|(index, value)| ChartPoint {
                    x: viewport_width * index as f64 / last,
                    y: max_value - value,
                })
                .collect()
        }
    }
}

/// Serializes points for an SVG `polyline`'s `points` attribute.
pub fn polyline_points(points: &[ChartPoint]) -> String {
    points
        .iter()
        .map(|point| format!("{},{}", format_activity(point.x), format_activity(point.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Height of the chart viewBox for a given scale.
pub fn viewbox_height(max_value: f64) -> f64 {
    max_value + CHART_PADDING
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meditation_group() -> Vec<ActivityWeek> {
        vec![
            ActivityWeek::new([5.0, 10.0, 15.0, 20.0, 10.0, 5.0, 0.0]),
            ActivityWeek::new([10.0, 5.0, 15.0, 10.0, 5.0, 0.0, 0.0]),
            ActivityWeek::new([0.0, 5.0, 10.0, 15.0, 5.0, 5.0, 0.0]),
        ]
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 0.01,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn group_average_matches_reference_week() {
        let avg = average_per_day(&meditation_group());
        let expected = [5.0, 6.67, 13.33, 15.0, 6.67, 3.33, 0.0];
        for (actual, expected) in avg.0.iter().zip(expected) {
            assert_close(*actual, expected);
        }
    }

    #[test]
    fn average_stays_within_column_bounds() {
        let group = meditation_group();
        let avg = average_per_day(&group);
        for day in 0..DAYS_PER_WEEK {
            let column: Vec<f64> = group.iter().map(|week| week.0[day]).collect();
            let lo = column.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = column.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            assert!(avg.0[day] >= lo && avg.0[day] <= hi, "day {day} out of bounds");
        }
    }

    #[test]
    fn empty_group_averages_to_zero_week() {
        assert_eq!(average_per_day(&[]), ActivityWeek::zero());
    }

    #[test]
    fn average_columns_keeps_row_width() {
        let a = [1.0, 2.0, 3.0];
        let b = [3.0, 4.0, 5.0];
        assert_eq!(average_columns(&[&a, &b]), vec![2.0, 3.0, 4.0]);
        assert!(average_columns(&[]).is_empty());
    }

    #[test]
    fn max_is_floored_at_one() {
        assert_eq!(max_with_floor(&[]), 1.0);
        assert_eq!(max_with_floor(&[0.0, 0.0, 0.0]), 1.0);
        assert_eq!(max_with_floor(&[0.5, -3.0]), 1.0);
        assert_eq!(max_with_floor(&[10000.0, 8000.0, 12000.0]), 12000.0);
    }

    #[test]
    fn points_span_the_viewport() {
        let week = meditation_group()[0];
        let max = max_with_floor(week.values());
        let points = chart_points(week.values(), 200.0, max);

        assert_eq!(points.len(), DAYS_PER_WEEK);
        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[DAYS_PER_WEEK - 1].x, 200.0);
        assert!(points.windows(2).all(|pair| pair[0].x <= pair[1].x));
        // Peak (Thu, 20) plots at the top edge.
        assert_eq!(points[3].y, 0.0);
        assert_eq!(points[6].y, 20.0);
    }

    #[test]
    fn single_value_is_pinned_left() {
        let points = chart_points(&[4.0], 200.0, 4.0);
        assert_eq!(points, vec![ChartPoint { x: 0.0, y: 0.0 }]);
        assert!(chart_points(&[], 200.0, 1.0).is_empty());
    }

    #[test]
    fn polyline_trims_coordinates() {
        let points = chart_points(&[0.0, 1.5, 3.0, 2.0], 200.0, 3.0);
        assert_eq!(polyline_points(&points), "0,3 66.67,1.5 133.33,0 200,1");
    }

    #[test]
    fn viewbox_leaves_headroom() {
        assert_eq!(viewbox_height(15.0), 35.0);
    }
}
