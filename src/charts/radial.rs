//! Radial progress rings and linear progress bars

use serde::Serialize;
use std::f64::consts::PI;
use std::time::Duration;

use super::{fmt_coord, Point};

/// Size of the radial progress surface
const RADIAL_SIZE: f64 = 48.0;
const RADIAL_STROKE: f64 = 3.0;
/// Spin duration of a full (100%) ring
const FULL_SPIN: Duration = Duration::from_secs(2);

/// Percentage ring drawn clockwise from twelve o'clock
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadialProgress {
    pub value: f64,
    pub fraction: f64,
    pub sweep_degrees: f64,
    pub center: Point,
    pub radius: f64,
    /// SVG path for the filled arc; empty at 0%
    pub arc: String,
    /// How long the ring takes to sweep in
    pub spin: Duration,
}

/// Ring for a percentage; values clamp into [0, 100].
pub fn radial_progress(value: f64) -> RadialProgress {
    let fraction = if value.is_finite() {
        value.clamp(0.0, 100.0) / 100.0
    } else {
        0.0
    };
    let radius = RADIAL_SIZE / 2.0 - RADIAL_STROKE;
    let center = Point::new(RADIAL_SIZE / 2.0, RADIAL_SIZE / 2.0);

    RadialProgress {
        value,
        fraction,
        sweep_degrees: fraction * 360.0,
        center,
        radius,
        arc: arc_path(center, radius, fraction),
        spin: FULL_SPIN.mul_f64(fraction),
    }
}

fn arc_path(center: Point, radius: f64, fraction: f64) -> String {
    if fraction <= 0.0 {
        return String::new();
    }
    // A full circle cannot be expressed as a single SVG arc
    let sweep = (fraction * 2.0 * PI).min(2.0 * PI - 1e-4);
    let start = Point::new(center.x, center.y - radius);
    let end = Point::new(
        center.x + radius * sweep.sin(),
        center.y - radius * sweep.cos(),
    );
    let large_arc = if sweep > PI { 1 } else { 0 };

    format!(
        "M {} {} A {} {} 0 {} 1 {} {}",
        fmt_coord(start.x),
        fmt_coord(start.y),
        fmt_coord(radius),
        fmt_coord(radius),
        large_arc,
        fmt_coord(end.x),
        fmt_coord(end.y)
    )
}

/// Width share of a progress bar, guarded against a non-positive `max`.
pub fn progress_fraction(value: f64, max: f64) -> f64 {
    if max > 0.0 && value.is_finite() {
        (value / max).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_ring() {
        let ring = radial_progress(50.0);
        assert_eq!(ring.sweep_degrees, 180.0);
        assert_eq!(ring.spin, Duration::from_secs(1));
        assert!(ring.arc.starts_with("M 24 3 A 21 21 0 0 1"));
    }

    #[test]
    fn test_full_ring_uses_large_arc() {
        let ring = radial_progress(98.0);
        assert!(ring.arc.contains(" 0 1 1 "));
    }

    #[test]
    fn test_empty_ring() {
        let ring = radial_progress(0.0);
        assert!(ring.arc.is_empty());
        assert_eq!(ring.spin, Duration::ZERO);

        let ring = radial_progress(f64::NAN);
        assert_eq!(ring.fraction, 0.0);
    }

    #[test]
    fn test_progress_fraction_guards() {
        assert_eq!(progress_fraction(45.0, 100.0), 0.45);
        assert_eq!(progress_fraction(5.0, 0.0), 0.0);
        assert_eq!(progress_fraction(150.0, 100.0), 1.0);
    }
}
