//! Analytics Page
//!
//! Static trends and breakdowns; no timers.

use bogor_nexus::AnalyticsState;
use leptos::*;

use crate::components::{AreaChartView, DonutView, StatTileView};

/// Analytics panel component
#[component]
pub fn AnalyticsPanel() -> impl IntoView {
    let state = AnalyticsState::default();

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Analytics"</h1>
                <p class="text-gray-400 mt-1">"Trends and distribution across the city"</p>
            </div>

            <section class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {state
                    .kpis
                    .iter()
                    .map(|kpi| view! {
                        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
                            <div class="flex items-center space-x-2 text-gray-400 text-sm">
                                <span>{kpi.icon.glyph()}</span>
                                <span>{kpi.title}</span>
                            </div>
                            <div class="text-2xl font-bold mt-2">{kpi.value}</div>
                            <div class="text-xs text-gray-500">{kpi.subtitle}</div>
                        </div>
                    })
                    .collect_view()}
            </section>

            <div class="grid md:grid-cols-2 gap-8">
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Traffic Trend"</h2>
                    <AreaChartView chart=state.traffic.clone() color="#fb923c" />
                </section>
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Population Trend"</h2>
                    <AreaChartView chart=state.population.clone() color="#c084fc" />
                </section>
            </div>

            <div class="grid md:grid-cols-2 gap-8">
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Area Distribution"</h2>
                    <DonutView chart=state.distribution.clone() />
                </section>
                <section class="bg-gray-800 rounded-xl p-6 space-y-3">
                    <h2 class="text-xl font-semibold mb-4">"Key Metrics"</h2>
                    {state
                        .metrics
                        .iter()
                        .map(|row| view! {
                            <div class="flex items-center justify-between">
                                <div class="flex items-center space-x-2">
                                    <span>{row.icon.glyph()}</span>
                                    <span class="text-gray-300">{row.label}</span>
                                </div>
                                <div class="flex items-center space-x-2">
                                    <span class="font-semibold">{row.value}</span>
                                    <span class="text-sm text-gray-400">
                                        {row.trend.arrow()} " " {row.change}
                                    </span>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </section>
            </div>

            <section class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {state
                    .summary
                    .iter()
                    .map(|(label, value)| view! {
                        <StatTileView icon=bogor_nexus::Icon::TrendingUp label=*label value=value.to_string() />
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
