//! System Page
//!
//! Resource gauges and uptime share one timer; the live log has its own and
//! stops after replaying its script.

use bogor_nexus::charts::{gauge, DONUT_SIZE};
use bogor_nexus::model::fixtures::{QUICK_ACTIONS, SERVICES};
use bogor_nexus::simulation::Resource;
use bogor_nexus::{Simulator, SystemState, TickOutcome};
use leptos::*;

use crate::components::{GaugeView, StatTileView};
use crate::state::{use_simulator, UiState};

/// System panel component
#[component]
pub fn SystemPanel() -> impl IntoView {
    let ui = use_context::<UiState>().expect("UiState not found");
    let settings = ui.settings.get_value();
    let state = create_rw_signal(SystemState::new(&settings));

    use_simulator(state, settings.resources_period(), |s, rng| {
        s.resources.tick(rng);
        s.uptime.tick(rng);
        TickOutcome::Continue
    });
    use_simulator(state, settings.live_log_period(), |s, rng| s.log.tick(rng));

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"System Monitor"</h1>
                    <p class="text-gray-400 mt-1">"Infrastructure health and services"</p>
                </div>
                {move || {
                    let security = state.with(|s| s.security);
                    view! {
                        <div class="flex items-center space-x-2 text-green-400">
                            <span>{security.icon().glyph()}</span>
                            <span>{security.message()}</span>
                        </div>
                    }
                }}
            </div>

            <section class="grid grid-cols-2 md:grid-cols-5 gap-4">
                {Resource::ALL
                    .into_iter()
                    .map(|resource| view! { <ResourceGauge state=state resource=resource /> })
                    .collect_view()}
            </section>

            <section class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {move || {
                    state
                        .with(|s| s.stats())
                        .into_iter()
                        .map(|(icon, label, value)| view! {
                            <StatTileView icon=icon label=label value=value />
                        })
                        .collect_view()
                }}
            </section>

            <div class="grid md:grid-cols-2 gap-8">
                <section class="bg-gray-800 rounded-xl p-6 space-y-3">
                    <h2 class="text-xl font-semibold">"Services"</h2>
                    {SERVICES
                        .iter()
                        .map(|service| {
                            let (dot, status) = if service.operational {
                                ("bg-green-400", "Operational")
                            } else {
                                ("bg-red-400", "Offline")
                            };
                            view! {
                                <div class="flex items-center justify-between">
                                    <div class="flex items-center space-x-2">
                                        <span>{service.icon.glyph()}</span>
                                        <span>{service.name}</span>
                                    </div>
                                    <div class="flex items-center space-x-3 text-sm">
                                        <span class=format!("w-2 h-2 rounded-full {}", dot) />
                                        <span class="text-gray-400">{status}</span>
                                        <span class="text-gray-500">{format!("{}ms", service.response_ms)}</span>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}

                    <div class="grid grid-cols-2 gap-2 pt-4">
                        {QUICK_ACTIONS
                            .iter()
                            .map(|action| {
                                let name = action.name;
                                view! {
                                    <button
                                        class="px-3 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm"
                                        on:click=move |_| web_sys::console::log_1(&name.into())
                                    >
                                        {action.icon.glyph()} " " {name}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section class="bg-gray-950 rounded-xl p-6 font-mono text-sm">
                    <h2 class="text-xl font-semibold font-sans mb-4">"Live Log"</h2>
                    <div class="space-y-1 text-green-400 max-h-64 overflow-y-auto">
                        {move || {
                            state
                                .with(|s| s.log.lines())
                                .into_iter()
                                .map(|line| view! { <div>{line}</div> })
                                .collect_view()
                        }}
                    </div>
                </section>
            </div>
        </div>
    }
}

/// One resource rendered as a ring gauge
#[component]
fn ResourceGauge(state: RwSignal<SystemState>, resource: Resource) -> impl IntoView {
    let reading = move || state.with(|s| s.resources.readings().get(resource));

    view! {
        <div class="bg-gray-800 rounded-lg p-4 flex flex-col items-center">
            <div class="w-24 h-24">
                {move || {
                    let value = reading();
                    view! {
                        <GaugeView
                            gauge=gauge(value, resource.jitter().max, DONUT_SIZE)
                            label=format!("{:.0}{}", value, resource.unit())
                        />
                    }
                }}
            </div>
            <div class="flex items-center space-x-1 mt-2 text-sm text-gray-400">
                <span>{resource.icon().glyph()}</span>
                <span>{resource.label()}</span>
            </div>
        </div>
    }
}
