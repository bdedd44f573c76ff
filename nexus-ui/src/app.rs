//! App Root Component
//!
//! Sidebar menu plus whichever panel is active. Exactly one panel is mounted
//! at a time; switching drops the old panel (and its timers) first.

use bogor_nexus::Panel;
use leptos::*;

use crate::components::Sidebar;
use crate::pages::{AnalyticsPanel, DashboardPanel, NeuralPanel, SystemPanel};
use crate::state::global::{provide_ui_state, UiState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_ui_state();

    let state = use_context::<UiState>().expect("UiState not found");

    // Memo so that re-selecting the active panel does not remount it
    let active = create_memo(move |_| state.navigation.with(|nav| nav.active()));

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex">
            <Sidebar />

            <main class="flex-1 px-8 py-8 overflow-y-auto">
                {move || match active.get() {
                    Panel::Dashboard => view! { <DashboardPanel /> }.into_view(),
                    Panel::Analytics => view! { <AnalyticsPanel /> }.into_view(),
                    Panel::Neural => view! { <NeuralPanel /> }.into_view(),
                    Panel::System => view! { <SystemPanel /> }.into_view(),
                }}
            </main>
        </div>
    }
}
