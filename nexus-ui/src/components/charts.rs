//! Chart Components
//!
//! SVG views over the core chart geometry. Each view only paints; every
//! coordinate comes from `bogor_nexus::charts`.

use bogor_nexus::charts::{
    AreaChart, BarChart, DonutChart, Gauge, LineChart, NetworkLayout, RadialProgress,
};
use leptos::*;

const TRACK: &str = "#374151";

/// Stroked polyline
#[component]
pub fn LineChartView(
    chart: LineChart,
    #[prop(default = "#22d3ee")]
    color: &'static str,
    #[prop(default = "w-full h-16")]
    size_class: &'static str,
) -> impl IntoView {
    view! {
        <svg viewBox=chart.view_box.to_svg_attr() preserveAspectRatio="none" class=size_class>
            <path
                d=chart.path.to_svg_data()
                stroke=color
                stroke-width="2"
                fill="none"
                stroke-linecap="round"
            />
        </svg>
    }
}

/// Polyline over a translucent fill
#[component]
pub fn AreaChartView(
    chart: AreaChart,
    #[prop(default = "#fb923c")]
    color: &'static str,
) -> impl IntoView {
    view! {
        <svg viewBox=chart.stroke.view_box.to_svg_attr() preserveAspectRatio="none" class="w-full h-48">
            <path d=chart.fill.to_svg_data() fill=color fill-opacity="0.2" />
            <path d=chart.stroke.path.to_svg_data() stroke=color stroke-width="2" fill="none" />
        </svg>
    }
}

/// Vertical bars with labels underneath
#[component]
pub fn BarChartView(
    chart: BarChart,
    #[prop(default = "#fb923c")]
    color: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <svg viewBox=chart.view_box.to_svg_attr() preserveAspectRatio="none" class="w-full h-16">
                {chart
                    .bars
                    .iter()
                    .map(|bar| view! {
                        <rect
                            x=bar.x
                            y=bar.y
                            width=bar.width
                            height=bar.height
                            rx="1"
                            fill=color
                            fill-opacity="0.8"
                        />
                    })
                    .collect_view()}
            </svg>
            <div class="flex justify-between text-[10px] text-gray-500 mt-1">
                {chart
                    .bars
                    .into_iter()
                    .map(|bar| view! { <span class="truncate">{bar.label}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Single-value ring
#[component]
pub fn GaugeView(
    gauge: Gauge,
    #[prop(default = "#22d3ee")]
    color: &'static str,
    #[prop(optional, into)]
    label: Option<String>,
) -> impl IntoView {
    let size = gauge.center * 2.0;
    let rotate = format!("rotate(-90 {} {})", gauge.center, gauge.center);

    view! {
        <svg viewBox=format!("0 0 {} {}", size, size) class="w-full h-full">
            <circle cx=gauge.center cy=gauge.center r=gauge.radius stroke=TRACK stroke-width="3" fill="none" />
            <circle
                cx=gauge.center
                cy=gauge.center
                r=gauge.radius
                stroke=color
                stroke-width="3"
                fill="none"
                stroke-linecap="round"
                stroke-dasharray=gauge.circumference
                stroke-dashoffset=gauge.dash_offset
                transform=rotate
                style="transition: stroke-dashoffset 1s ease"
            />
            {label.map(|text| view! {
                <text
                    x=gauge.center
                    y=gauge.center
                    fill="white"
                    font-size="12"
                    text-anchor="middle"
                    dominant-baseline="middle"
                >
                    {text}
                </text>
            })}
        </svg>
    }
}

/// Multi-segment donut with a legend
#[component]
pub fn DonutView(chart: DonutChart) -> impl IntoView {
    let size = chart.center * 2.0;
    let rotate = format!("rotate(-90 {} {})", chart.center, chart.center);
    let legend = chart.arcs.clone();

    view! {
        <div class="flex items-center space-x-6">
            <svg viewBox=format!("0 0 {} {}", size, size) class="w-40 h-40">
                {chart
                    .arcs
                    .iter()
                    .map(|arc| view! {
                        <circle
                            cx=chart.center
                            cy=chart.center
                            r=chart.radius
                            stroke=arc.color.clone()
                            stroke-width=bogor_nexus::charts::DONUT_STROKE
                            fill="none"
                            stroke-dasharray=arc.dash_array(chart.circumference)
                            stroke-dashoffset=arc.dash_offset()
                            transform=rotate.clone()
                        />
                    })
                    .collect_view()}
                <text
                    x=chart.center
                    y=chart.center
                    fill="white"
                    font-size="16"
                    font-weight="bold"
                    text-anchor="middle"
                    dominant-baseline="middle"
                >
                    {format!("{}%", chart.total)}
                </text>
            </svg>

            <div class="space-y-2">
                {legend
                    .into_iter()
                    .map(|arc| view! {
                        <div class="flex items-center space-x-2 text-sm">
                            <div class="w-3 h-3 rounded-full" style=format!("background-color: {}", arc.color) />
                            <span class="text-gray-300">{arc.label}</span>
                            <span class="text-gray-500">{format!("{:.0}%", arc.fraction * 100.0)}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Percentage ring that sweeps in from twelve o'clock
#[component]
pub fn RadialView(
    ring: RadialProgress,
    #[prop(default = "#facc15")]
    color: &'static str,
) -> impl IntoView {
    let size = ring.center.x * 2.0;
    let spin = format!("transition: all {}ms ease-out", ring.spin.as_millis());

    view! {
        <svg viewBox=format!("0 0 {} {}", size, size) class="w-12 h-12">
            <circle cx=ring.center.x cy=ring.center.y r=ring.radius stroke=TRACK stroke-width="3" fill="none" />
            {(!ring.arc.is_empty()).then(|| view! {
                <path d=ring.arc.clone() stroke=color stroke-width="3" fill="none" stroke-linecap="round" style=spin.clone() />
            })}
        </svg>
    }
}

/// Layered network diagram, active rows highlighted
#[component]
pub fn NetworkView(
    layout: NetworkLayout,
    #[prop(default = "#22d3ee")]
    color: &'static str,
) -> impl IntoView {
    view! {
        <svg viewBox=layout.view_box.to_svg_attr() class="w-full h-64">
            {layout
                .synapses
                .iter()
                .map(|synapse| view! {
                    <line
                        x1=synapse.from.x
                        y1=synapse.from.y
                        x2=synapse.to.x
                        y2=synapse.to.y
                        stroke=color
                        stroke-opacity="0.1"
                        stroke-width="0.5"
                    />
                })
                .collect_view()}
            {layout
                .nodes
                .iter()
                .map(|node| {
                    let (radius, opacity) = if node.active { (5, "1") } else { (4, "0.3") };
                    view! {
                        <circle
                            cx=node.position.x
                            cy=node.position.y
                            r=radius
                            fill=color
                            fill-opacity=opacity
                            style="transition: all 0.3s ease"
                        />
                    }
                })
                .collect_view()}
        </svg>
    }
}
