//! Metric Card Component
//!
//! Dashboard headline card and the small stat tiles used across panels.

use bogor_nexus::panels::{CardChart, MetricCard};
use bogor_nexus::Icon;
use leptos::*;

use super::charts::{BarChartView, GaugeView, LineChartView, RadialView};

/// Headline card: value, subtitle, progress strip and a small chart
#[component]
pub fn MetricCardView(card: MetricCard) -> impl IntoView {
    let accent = card.accent;
    let chart = match card.chart {
        CardChart::Bars(chart) => view! { <BarChartView chart=chart color=accent /> }.into_view(),
        CardChart::Line(chart) => view! { <LineChartView chart=chart color=accent /> }.into_view(),
        CardChart::Radial(ring) => view! { <RadialView ring=ring color=accent /> }.into_view(),
        CardChart::Gauge(gauge) => view! {
            <div class="w-12 h-12">
                <GaugeView gauge=gauge color=accent />
            </div>
        }
        .into_view(),
    };

    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition">
            <div class="flex items-center justify-between">
                <div class="flex items-center space-x-2">
                    <span class="text-xl">{card.icon.glyph()}</span>
                    <span class="text-gray-400 text-sm">{card.title}</span>
                </div>
            </div>

            <div class="text-3xl font-bold mt-2" style=format!("color: {}", accent)>
                {card.value}
            </div>
            <div class="text-xs text-gray-500 mt-1">{card.subtitle}</div>

            <div class="mt-3">{chart}</div>

            <div class="h-1 bg-gray-700 rounded mt-3">
                <div
                    class="h-1 rounded"
                    style=format!(
                        "width: {:.0}%; background-color: {}; transition: width 1s ease",
                        card.progress * 100.0,
                        accent
                    )
                />
            </div>
        </div>
    }
}

/// Compact icon / label / value tile
#[component]
pub fn StatTileView(
    icon: Icon,
    label: &'static str,
    #[prop(into)]
    value: MaybeSignal<String>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg px-4 py-3 flex items-center space-x-3 border border-gray-700">
            <span class="text-xl">{icon.glyph()}</span>
            <div>
                <div class="text-xs text-gray-400">{label}</div>
                <div class="font-semibold">{move || value.get()}</div>
            </div>
        </div>
    }
}
