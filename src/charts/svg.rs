//! Standalone SVG documents
//!
//! Serialises chart geometry into self-contained `.svg` files. Colours are
//! passed in by the caller; this module only knows about shapes.

use std::fmt::Write;

use super::{
    fmt_coord, AreaChart, BarChart, DonutChart, Gauge, LineChart, NetworkLayout, RadialProgress,
    ViewBox,
};

const BACKGROUND: &str = "#111827";
const TRACK: &str = "#374151";

/// Incrementally built SVG document
#[derive(Debug, Clone)]
pub struct SvgDocument {
    view_box: ViewBox,
    body: String,
}

impl SvgDocument {
    pub fn new(view_box: ViewBox) -> Self {
        Self {
            view_box,
            body: String::new(),
        }
    }

    /// Append a raw element
    pub fn element(mut self, markup: impl AsRef<str>) -> Self {
        self.body.push_str("  ");
        self.body.push_str(markup.as_ref());
        self.body.push('\n');
        self
    }

    pub fn finish(self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{}" style="background:{}">"#,
            self.view_box.to_svg_attr(),
            BACKGROUND
        );
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

pub fn line_svg(chart: &LineChart, color: &str) -> String {
    SvgDocument::new(chart.view_box)
        .element(format!(
            r#"<path d="{}" stroke="{}" stroke-width="2" fill="none" stroke-linecap="round"/>"#,
            chart.path.to_svg_data(),
            color
        ))
        .finish()
}

pub fn area_svg(chart: &AreaChart, color: &str) -> String {
    SvgDocument::new(chart.stroke.view_box)
        .element(format!(
            r#"<path d="{}" fill="{}" fill-opacity="0.3"/>"#,
            chart.fill.to_svg_data(),
            color
        ))
        .element(format!(
            r#"<path d="{}" stroke="{}" stroke-width="2" fill="none" stroke-linecap="round"/>"#,
            chart.stroke.path.to_svg_data(),
            color
        ))
        .finish()
}

pub fn bar_svg(chart: &BarChart, color: &str) -> String {
    let mut doc = SvgDocument::new(chart.view_box);
    for bar in &chart.bars {
        doc = doc.element(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"><title>{} {}%</title></rect>"#,
            fmt_coord(bar.x),
            fmt_coord(bar.y),
            fmt_coord(bar.width),
            fmt_coord(bar.height),
            color,
            escape(&bar.label),
            fmt_coord(bar.value)
        ));
    }
    doc.finish()
}

pub fn gauge_svg(gauge: &Gauge, color: &str) -> String {
    let size = gauge.center * 2.0;
    let circle = |stroke: &str, extra: String| {
        format!(
            r#"<circle cx="{c}" cy="{c}" r="{r}" stroke="{stroke}" stroke-width="3" fill="none"{extra}/>"#,
            c = fmt_coord(gauge.center),
            r = fmt_coord(gauge.radius),
        )
    };
    SvgDocument::new(ViewBox {
        width: size,
        height: size,
    })
    .element(circle(TRACK, String::new()))
    .element(circle(
        color,
        format!(
            r#" stroke-dasharray="{}" stroke-dashoffset="{}" transform="rotate(-90 {c} {c})""#,
            fmt_coord(gauge.circumference),
            fmt_coord(gauge.dash_offset),
            c = fmt_coord(gauge.center)
        ),
    ))
    .finish()
}

pub fn donut_svg(chart: &DonutChart) -> String {
    let size = chart.center * 2.0;
    let mut doc = SvgDocument::new(ViewBox {
        width: size,
        height: size,
    });
    for arc in &chart.arcs {
        doc = doc.element(format!(
            r#"<circle cx="{c}" cy="{c}" r="{r}" stroke="{}" stroke-width="{}" fill="none" stroke-dasharray="{}" stroke-dashoffset="{}" transform="rotate(-90 {c} {c})"><title>{}</title></circle>"#,
            arc.color,
            fmt_coord(super::DONUT_STROKE),
            arc.dash_array(chart.circumference),
            fmt_coord(arc.dash_offset()),
            escape(&arc.label),
            c = fmt_coord(chart.center),
            r = fmt_coord(chart.radius),
        ));
    }
    doc.element(format!(
        r#"<text x="{c}" y="{c}" fill="white" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
        fmt_coord(chart.total),
        c = fmt_coord(chart.center)
    ))
    .finish()
}

pub fn radial_svg(ring: &RadialProgress, color: &str) -> String {
    let size = ring.center.x * 2.0;
    let mut doc = SvgDocument::new(ViewBox {
        width: size,
        height: size,
    })
    .element(format!(
        r#"<circle cx="{}" cy="{}" r="{}" stroke="{}" stroke-width="3" fill="none"/>"#,
        fmt_coord(ring.center.x),
        fmt_coord(ring.center.y),
        fmt_coord(ring.radius),
        TRACK
    ));
    if !ring.arc.is_empty() {
        doc = doc.element(format!(
            r#"<path d="{}" stroke="{}" stroke-width="3" fill="none"/>"#,
            ring.arc, color
        ));
    }
    doc.finish()
}

pub fn network_svg(layout: &NetworkLayout, color: &str) -> String {
    let mut doc = SvgDocument::new(layout.view_box);
    for synapse in &layout.synapses {
        doc = doc.element(format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-opacity="0.1" stroke-width="0.5"/>"#,
            fmt_coord(synapse.from.x),
            fmt_coord(synapse.from.y),
            fmt_coord(synapse.to.x),
            fmt_coord(synapse.to.y),
            color
        ));
    }
    for node in &layout.nodes {
        let opacity = if node.active { "1" } else { "0.3" };
        doc = doc.element(format!(
            r#"<circle cx="{}" cy="{}" r="4" fill="{}" fill-opacity="{}"/>"#,
            fmt_coord(node.position.x),
            fmt_coord(node.position.y),
            color,
            opacity
        ));
    }
    doc.finish()
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{area_chart, bar_chart, gauge, proportional_donut, radial_progress};

    #[test]
    fn test_area_document() {
        let svg = area_svg(&area_chart(&[45.0, 60.0], 30.0), "#00f0ff");
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"viewBox="0 0 60 100""#));
        assert!(svg.contains("M 0 100 L 0 55 L 30 40 L 30 100 Z"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_bar_labels_escaped() {
        let svg = bar_svg(&bar_chart(&[50.0], &["A&B"]), "#fb923c");
        assert!(svg.contains("A&amp;B 50%"));
    }

    #[test]
    fn test_empty_donut_has_no_arcs() {
        let svg = donut_svg(&proportional_donut(&[]));
        assert!(!svg.contains("stroke-dasharray"));
        assert!(svg.contains(">0</text>"));
    }

    #[test]
    fn test_gauge_and_ring_documents() {
        let svg = gauge_svg(&gauge(85.0, 100.0, 50.0), "#22d3ee");
        assert_eq!(svg.matches("<circle").count(), 2);

        let svg = radial_svg(&radial_progress(0.0), "#facc15");
        assert!(!svg.contains("<path"));
    }
}
