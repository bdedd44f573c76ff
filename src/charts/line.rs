//! Line and area charts

use serde::Serialize;

use super::{value_to_y, Path, Point, ViewBox, SURFACE_HEIGHT};

/// Polyline through a series, one vertex per value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub points: Vec<Point>,
    pub path: Path,
    pub view_box: ViewBox,
}

/// Line chart plus the filled region between it and the baseline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaChart {
    pub stroke: LineChart,
    /// Closed polygon: baseline anchor, every stroke vertex, baseline anchor
    pub fill: Path,
}

/// Map `data` to `(i * step, 100 - v)` vertices.
pub fn line_chart(data: &[f64], step: f64) -> LineChart {
    let points: Vec<Point> = data
        .iter()
        .enumerate()
        .map(|(i, &v)| Point::new(i as f64 * step, value_to_y(v)))
        .collect();

    LineChart {
        path: Path::polyline(&points),
        view_box: ViewBox {
            width: data.len() as f64 * step,
            height: SURFACE_HEIGHT,
        },
        points,
    }
}

/// Line chart with a filled area underneath.
///
/// The fill polygon holds N + 2 vertices: it starts at the bottom-left corner,
/// follows the stroke, then drops back to the baseline under the last point.
pub fn area_chart(data: &[f64], step: f64) -> AreaChart {
    let stroke = line_chart(data, step);

    let fill = match stroke.points.last() {
        Some(last) => {
            let mut outline = Vec::with_capacity(stroke.points.len() + 2);
            outline.push(Point::new(0.0, SURFACE_HEIGHT));
            outline.extend_from_slice(&stroke.points);
            outline.push(Point::new(last.x, SURFACE_HEIGHT));
            Path::polygon(&outline)
        }
        None => Path::default(),
    };

    AreaChart { stroke, fill }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_line_chart_mapping() {
        let chart = line_chart(&[30.0, 45.0, 35.0], 20.0);
        assert_eq!(
            chart.points,
            vec![
                Point::new(0.0, 70.0),
                Point::new(20.0, 55.0),
                Point::new(40.0, 65.0)
            ]
        );
        assert_eq!(chart.path.to_svg_data(), "M 0 70 L 20 55 L 40 65");
        assert_eq!(chart.view_box.to_svg_attr(), "0 0 60 100");
    }

    #[test]
    fn test_empty_input_renders_nothing() {
        let chart = area_chart(&[], 30.0);
        assert!(chart.stroke.points.is_empty());
        assert!(chart.stroke.path.is_empty());
        assert!(chart.fill.is_empty());
        assert_eq!(chart.stroke.view_box.width, 0.0);
    }

    #[test]
    fn test_area_fill_anchors_to_baseline() {
        let chart = area_chart(&[45.0, 60.0, 75.0], 30.0);
        let vertices = chart.fill.vertices();
        assert_eq!(vertices.len(), 5);
        assert_eq!(vertices[0], Point::new(0.0, 100.0));
        assert_eq!(vertices[4], Point::new(60.0, 100.0));
        assert!(chart.fill.is_closed());
    }

    proptest! {
        #[test]
        fn prop_one_vertex_per_value(data in prop::collection::vec(0.0f64..=100.0, 0..64), step in 1.0f64..50.0) {
            let chart = area_chart(&data, step);
            prop_assert_eq!(chart.stroke.points.len(), data.len());
            prop_assert_eq!(chart.stroke.path.vertices().len(), data.len());
            let expected_fill = if data.is_empty() { 0 } else { data.len() + 2 };
            prop_assert_eq!(chart.fill.vertices().len(), expected_fill);
        }

        #[test]
        fn prop_x_strictly_increasing(data in prop::collection::vec(0.0f64..=100.0, 2..64), step in 1.0f64..50.0) {
            let chart = line_chart(&data, step);
            for pair in chart.points.windows(2) {
                prop_assert!(pair[1].x > pair[0].x);
            }
        }
    }
}
