//! Circular progress indicator geometry.

/// Radius of the progress ring inside its 100×100 viewBox.
pub const RING_RADIUS: f64 = 45.0;

/// Dash length covering the full ring (2·π·45, rounded).
pub const RING_CIRCUMFERENCE: f64 = 283.0;

/// Dash offset that leaves `percent` of the circle stroked.
///
/// No clamping happens here; see [`ring_offset`] for the rendered value.
pub fn stroke_offset(percent: f64, circumference: f64) -> f64 {
    circumference - (circumference * percent / 100.0)
}

/// Bounds a progress value to `[0, 100]`; NaN counts as no progress.
pub fn clamp_percent(percent: f64) -> f64 {
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}

/// Offset actually rendered by the ring component.
pub fn ring_offset(percent: f64) -> f64 {
    stroke_offset(clamp_percent(percent), RING_CIRCUMFERENCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_at_reference_points() {
        assert_eq!(stroke_offset(0.0, 283.0), 283.0);
        assert_eq!(stroke_offset(100.0, 283.0), 0.0);
        assert_eq!(stroke_offset(50.0, 283.0), 141.5);
    }

    #[test]
    fn raw_offset_is_unbounded() {
        assert!(stroke_offset(120.0, 283.0) < 0.0);
        assert!(stroke_offset(-10.0, 283.0) > 283.0);
    }

    #[test]
    fn rendered_offset_stays_on_the_ring() {
        assert_eq!(ring_offset(150.0), 0.0);
        assert_eq!(ring_offset(-5.0), RING_CIRCUMFERENCE);
        assert_eq!(ring_offset(f64::NAN), RING_CIRCUMFERENCE);
        assert_eq!(clamp_percent(65.0), 65.0);
    }
}
