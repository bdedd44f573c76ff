//! Chart Geometry
//!
//! Pure drawing helpers. Each helper maps data points onto a fixed drawing
//! surface and returns a shape description; renderers (the browser UI, the
//! SVG writer, the terminal) decide how to paint it.
//!
//! ## Conventions
//!
//! - The surface is `SURFACE_HEIGHT` units tall; y grows downward, so a value
//!   `v` lands at `SURFACE_HEIGHT - v`.
//! - X positions come from the point index only, never from the value.
//! - Empty input yields an empty shape.

mod bar;
mod donut;
mod line;
mod network;
mod radial;
pub mod svg;

pub use bar::{bar_chart, Bar, BarChart};
pub use donut::{gauge, proportional_donut, DonutArc, DonutChart, Gauge, DONUT_SIZE, DONUT_STROKE};
pub use line::{area_chart, line_chart, AreaChart, LineChart};
pub use network::{network_layout, NetworkLayout, NetworkNode, Synapse};
pub use radial::{progress_fraction, radial_progress, RadialProgress};

use serde::Serialize;
use std::fmt::Write;

/// Height of the drawing surface shared by all value charts
pub const SURFACE_HEIGHT: f64 = 100.0;

/// A coordinate on the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One instruction of a vector path
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

/// A vector path made of straight segments
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Build an open polyline through `points`
    pub fn polyline(points: &[Point]) -> Self {
        let commands = points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                if i == 0 {
                    PathCommand::MoveTo(*p)
                } else {
                    PathCommand::LineTo(*p)
                }
            })
            .collect();
        Self { commands }
    }

    /// Build a closed polygon through `points`
    pub fn polygon(points: &[Point]) -> Self {
        let mut path = Self::polyline(points);
        if !path.commands.is_empty() {
            path.commands.push(PathCommand::Close);
        }
        path
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Vertices visited by the path, in order
    pub fn vertices(&self) -> Vec<Point> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
                PathCommand::Close => None,
            })
            .collect()
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// SVG `d` attribute, e.g. `M 0 35 L 20 55 Z`
    pub fn to_svg_data(&self) -> String {
        let mut d = String::new();
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                d.push(' ');
            }
            // Writing into a String cannot fail
            let _ = match command {
                PathCommand::MoveTo(p) => write!(d, "M {} {}", fmt_coord(p.x), fmt_coord(p.y)),
                PathCommand::LineTo(p) => write!(d, "L {} {}", fmt_coord(p.x), fmt_coord(p.y)),
                PathCommand::Close => write!(d, "Z"),
            };
        }
        d
    }
}

/// Width and height of a chart's coordinate system
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewBox {
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// SVG `viewBox` attribute
    pub fn to_svg_attr(&self) -> String {
        format!("0 0 {} {}", fmt_coord(self.width), fmt_coord(self.height))
    }
}

/// Format a coordinate with at most two decimals and no trailing zeros
pub(crate) fn fmt_coord(v: f64) -> String {
    let rounded = (v * 100.0).round() / 100.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        let s = format!("{:.2}", rounded);
        s.trim_end_matches('0').to_string()
    }
}

/// Map a value onto the surface's vertical axis
pub(crate) fn value_to_y(value: f64) -> f64 {
    SURFACE_HEIGHT - value
}
