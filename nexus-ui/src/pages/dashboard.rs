//! Dashboard Page
//!
//! City metric cards. Shows a loading state until the mock source answers.

use bogor_nexus::DashboardState;
use leptos::*;

use crate::components::{CardSkeleton, Loading, MetricCardView, StatTileView};
use crate::state::{use_timeout, UiState};

/// Dashboard panel component
#[component]
pub fn DashboardPanel() -> impl IntoView {
    let ui = use_context::<UiState>().expect("UiState not found");
    let state = create_rw_signal(DashboardState::default());

    // One-shot fetch; cancelled if the panel unmounts first
    let source = ui.source.get_value();
    use_timeout(source.latency(), move || {
        state.update(|s| s.loaded(source.snapshot()));
        web_sys::console::log_1(&"city metrics loaded".into());
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"City Overview"</h1>
                <p class="text-gray-400 mt-1">"Real-time metrics across Bogor"</p>
            </div>

            {move || {
                if state.with(|s| s.is_loading()) {
                    view! {
                        <div>
                            <Loading label="Loading city metrics..." />
                            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                                {(0..6).map(|_| view! { <CardSkeleton /> }).collect_view()}
                            </div>
                        </div>
                    }
                    .into_view()
                } else {
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                            {state
                                .with(|s| s.cards())
                                .into_iter()
                                .map(|card| view! { <MetricCardView card=card /> })
                                .collect_view()}
                        </div>
                    }
                    .into_view()
                }
            }}

            <section class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {state
                    .with_untracked(|s| s.mini_stats())
                    .iter()
                    .map(|tile| view! {
                        <StatTileView icon=tile.icon label=tile.label value=tile.value.to_string() />
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
