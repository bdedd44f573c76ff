//! Neural Network Page
//!
//! Four independent timers animate the network, the data stream, training
//! progress and the prediction counter. All stop when the panel unmounts.

use bogor_nexus::model::fixtures::{ANOMALIES, NEURAL_METRICS, PREDICTION_MODELS};
use bogor_nexus::{NeuralState, Simulator};
use leptos::*;

use crate::components::{LineChartView, NetworkView, StatTileView};
use crate::state::{use_simulator, UiState};

/// Neural network panel component
#[component]
pub fn NeuralPanel() -> impl IntoView {
    let ui = use_context::<UiState>().expect("UiState not found");
    let settings = ui.settings.get_value();
    let state = create_rw_signal(NeuralState::new(&settings));

    use_simulator(state, settings.node_activity_period(), |s, rng| s.nodes.tick(rng));
    use_simulator(state, settings.data_stream_period(), |s, rng| s.stream.tick(rng));
    use_simulator(state, settings.training_period(), |s, rng| s.training.tick(rng));
    use_simulator(state, settings.prediction_period(), |s, rng| s.predictions.tick(rng));

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Neural Network"</h1>
                <p class="text-gray-400 mt-1">"Predictive models for city operations"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Network Activity"</h2>
                {move || view! { <NetworkView layout=state.with(|s| s.network()) /> }}
            </section>

            <div class="grid md:grid-cols-3 gap-8">
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-lg font-semibold mb-4">"Data Stream"</h2>
                    {move || view! {
                        <LineChartView chart=state.with(|s| s.stream_chart()) color="#4ade80" size_class="w-full h-24" />
                    }}
                    <div class="flex space-x-1 mt-3 h-4 items-end">
                        {move || {
                            state
                                .with(|s| s.particles())
                                .into_iter()
                                .map(|v| view! {
                                    <div
                                        class="flex-1 bg-green-400 rounded-full"
                                        style=format!("height: {:.0}%; opacity: {:.2}", v, 0.3 + v / 150.0)
                                    />
                                })
                                .collect_view()
                        }}
                    </div>
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-lg font-semibold mb-4">"Model Training"</h2>
                    <div class="text-4xl font-bold text-purple-400">
                        {move || format!("{}%", state.with(|s| s.training.value()))}
                    </div>
                    <div class="h-2 bg-gray-700 rounded mt-4">
                        <div
                            class="h-2 rounded bg-purple-500"
                            style=move || format!(
                                "width: {}%; transition: width 1s ease",
                                state.with(|s| s.training.value())
                            )
                        />
                    </div>
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-lg font-semibold mb-4">"Predictions"</h2>
                    <div class="text-4xl font-bold text-cyan-400">
                        {move || state.with(|s| s.predictions.value())}
                    </div>
                    <div class="text-sm text-gray-500 mt-2">"processed this session"</div>
                </section>
            </div>

            <div class="grid md:grid-cols-2 gap-8">
                <section class="bg-gray-800 rounded-xl p-6 space-y-4">
                    <h2 class="text-xl font-semibold">"Prediction Models"</h2>
                    {PREDICTION_MODELS
                        .iter()
                        .map(|model| view! {
                            <div>
                                <div class="flex items-center justify-between text-sm">
                                    <span>{model.icon.glyph()} " " {model.name}</span>
                                    <span class="text-gray-400">
                                        {format!("{}% acc", model.accuracy)} " " {model.trend.arrow()}
                                    </span>
                                </div>
                                <div class="h-1 bg-gray-700 rounded mt-1">
                                    <div
                                        class="h-1 rounded bg-cyan-500"
                                        style=format!("width: {}%", model.confidence)
                                    />
                                </div>
                            </div>
                        })
                        .collect_view()}
                </section>

                <section class="bg-gray-800 rounded-xl p-6 space-y-3">
                    <h2 class="text-xl font-semibold">"Anomaly Detection"</h2>
                    {ANOMALIES
                        .iter()
                        .map(|anomaly| view! {
                            <div class="flex items-center justify-between">
                                <span class="text-gray-300">{anomaly.severity}</span>
                                <span class="font-semibold">{anomaly.count}</span>
                                <span class="text-xs text-gray-500">{anomaly.status}</span>
                            </div>
                        })
                        .collect_view()}
                </section>
            </div>

            <section class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {NEURAL_METRICS
                    .iter()
                    .map(|tile| view! {
                        <StatTileView icon=tile.icon label=tile.label value=tile.value.to_string() />
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
