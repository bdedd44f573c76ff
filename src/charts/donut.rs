//! Donut charts: single-value gauges and proportional breakdowns

use serde::Serialize;
use std::f64::consts::PI;

/// Outer size of the proportional donut
pub const DONUT_SIZE: f64 = 120.0;
/// Ring thickness of the proportional donut
pub const DONUT_STROKE: f64 = 12.0;

/// Ring filled to `value / max`, drawn with a dash offset on a circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Gauge {
    pub center: f64,
    pub radius: f64,
    pub circumference: f64,
    /// Filled share of the ring, in [0, 1]
    pub fraction: f64,
    /// `stroke-dashoffset` that reveals exactly `fraction` of the ring
    pub dash_offset: f64,
}

/// Single-value donut of outer size `size`.
///
/// A non-positive `max` renders an empty ring instead of dividing by zero.
pub fn gauge(value: f64, max: f64, size: f64) -> Gauge {
    let radius = (size / 2.0 - 2.0).max(0.0);
    let circumference = 2.0 * PI * radius;
    let fraction = if max > 0.0 {
        (value / max).clamp(0.0, 1.0)
    } else {
        0.0
    };

    Gauge {
        center: size / 2.0,
        radius,
        circumference,
        fraction,
        dash_offset: circumference - fraction * circumference,
    }
}

/// One coloured arc of a proportional donut
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonutArc {
    pub label: String,
    pub color: String,
    pub value: f64,
    /// Share of the total, in [0, 1]
    pub fraction: f64,
    /// Arc length along the ring
    pub length: f64,
    /// Distance along the ring where this arc begins
    pub start: f64,
}

impl DonutArc {
    /// `stroke-dasharray` that draws only this arc
    pub fn dash_array(&self, circumference: f64) -> String {
        format!(
            "{} {}",
            super::fmt_coord(self.length),
            super::fmt_coord(circumference - self.length)
        )
    }

    /// `stroke-dashoffset` that rotates the arc to its start
    pub fn dash_offset(&self) -> f64 {
        -self.start
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonutChart {
    pub total: f64,
    pub center: f64,
    pub radius: f64,
    pub circumference: f64,
    pub arcs: Vec<DonutArc>,
}

impl DonutChart {
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }
}

/// Split the ring among `(label, value, color)` segments.
///
/// Negative values count as zero. When the total is zero no arcs are emitted,
/// so callers always receive finite numbers.
pub fn proportional_donut(segments: &[(&str, f64, &str)]) -> DonutChart {
    let radius = (DONUT_SIZE - DONUT_STROKE) / 2.0;
    let circumference = 2.0 * PI * radius;
    let total: f64 = segments.iter().map(|(_, v, _)| v.max(0.0)).sum();

    let mut arcs = Vec::new();
    if total > 0.0 {
        let mut start = 0.0;
        for (label, value, color) in segments {
            let fraction = value.max(0.0) / total;
            let length = fraction * circumference;
            arcs.push(DonutArc {
                label: label.to_string(),
                color: color.to_string(),
                value: *value,
                fraction,
                length,
                start,
            });
            start += length;
        }
    }

    DonutChart {
        total,
        center: DONUT_SIZE / 2.0,
        radius,
        circumference,
        arcs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_gauge_rainfall() {
        let g = gauge(85.0, 100.0, 50.0);
        assert_eq!(g.radius, 23.0);
        assert!((g.fraction - 0.85).abs() < 1e-9);
        assert!((g.dash_offset - g.circumference * 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_gauge_zero_max() {
        let g = gauge(10.0, 0.0, 50.0);
        assert_eq!(g.fraction, 0.0);
        assert_eq!(g.dash_offset, g.circumference);
    }

    #[test]
    fn test_arcs_are_contiguous() {
        let chart = proportional_donut(&[("a", 25.0, "#fff"), ("b", 75.0, "#000")]);
        assert_eq!(chart.total, 100.0);
        assert_eq!(chart.arcs[0].start, 0.0);
        assert!((chart.arcs[1].start - chart.arcs[0].length).abs() < 1e-9);
        assert!((chart.arcs[1].fraction - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_zero_total_is_empty() {
        let chart = proportional_donut(&[("a", 0.0, "#fff"), ("b", 0.0, "#000")]);
        assert!(chart.is_empty());
        assert_eq!(chart.total, 0.0);

        let chart = proportional_donut(&[]);
        assert!(chart.is_empty());
    }

    proptest! {
        #[test]
        fn prop_fractions_sum_to_one(values in prop::collection::vec(0.0f64..1000.0, 1..16)) {
            prop_assume!(values.iter().sum::<f64>() > 0.0);
            let segments: Vec<(&str, f64, &str)> = values.iter().map(|v| ("s", *v, "#000")).collect();
            let chart = proportional_donut(&segments);
            let sum: f64 = chart.arcs.iter().map(|a| a.fraction).sum();
            prop_assert!((sum - 1.0).abs() < 1e-9);
            prop_assert!(chart.arcs.iter().all(|a| a.length.is_finite() && a.start.is_finite()));
        }
    }
}
