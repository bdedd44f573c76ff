//! Vertical bar charts

use serde::Serialize;

use super::{ViewBox, SURFACE_HEIGHT};

/// Horizontal space reserved for each bar
const SLOT_WIDTH: f64 = 20.0;
/// Empty space split on both sides of a bar
const SLOT_GAP: f64 = 4.0;

/// A single bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    /// Share of the surface height, in [0, 1]
    pub height_fraction: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub bars: Vec<Bar>,
    pub view_box: ViewBox,
}

/// Lay out one bar per percentage value.
///
/// Values are clamped into [0, 100]. Labels are matched by position; a value
/// without a label gets an empty one.
pub fn bar_chart(data: &[f64], labels: &[&str]) -> BarChart {
    let bars = data
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let height_fraction = value.clamp(0.0, 100.0) / 100.0;
            let height = height_fraction * SURFACE_HEIGHT;
            Bar {
                label: labels.get(i).copied().unwrap_or_default().to_string(),
                value,
                height_fraction,
                x: i as f64 * SLOT_WIDTH + SLOT_GAP / 2.0,
                y: SURFACE_HEIGHT - height,
                width: SLOT_WIDTH - SLOT_GAP,
                height,
            }
        })
        .collect();

    BarChart {
        bars,
        view_box: ViewBox {
            width: data.len() as f64 * SLOT_WIDTH,
            height: SURFACE_HEIGHT,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bar_heights_follow_values() {
        let chart = bar_chart(&[65.0, 80.0], &["S Kencana", "Ring Road"]);
        assert_eq!(chart.bars.len(), 2);
        assert_eq!(chart.bars[0].label, "S Kencana");
        assert!((chart.bars[0].height_fraction - 0.65).abs() < 1e-9);
        assert!((chart.bars[1].y - 20.0).abs() < 1e-9);
        assert_eq!(chart.view_box.width, 40.0);
    }

    #[test]
    fn test_missing_labels_are_empty() {
        let chart = bar_chart(&[10.0, 20.0, 30.0], &["only"]);
        assert_eq!(chart.bars[2].label, "");
    }

    #[test]
    fn test_out_of_range_values_clamp() {
        let chart = bar_chart(&[150.0, -5.0], &[]);
        assert_eq!(chart.bars[0].height_fraction, 1.0);
        assert_eq!(chart.bars[1].height_fraction, 0.0);
    }

    proptest! {
        #[test]
        fn prop_bars_match_input(data in prop::collection::vec(0.0f64..=100.0, 0..32)) {
            let chart = bar_chart(&data, &[]);
            prop_assert_eq!(chart.bars.len(), data.len());
            for pair in chart.bars.windows(2) {
                prop_assert!(pair[1].x > pair[0].x);
            }
        }
    }
}
