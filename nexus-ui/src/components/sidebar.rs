//! Sidebar Component
//!
//! Brand header and the fixed four-entry menu.

use bogor_nexus::MenuItem;
use leptos::*;

use crate::state::global::UiState;

/// Navigation sidebar component
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_context::<UiState>().expect("UiState not found");
    let session_start = chrono::Local::now().format("%H:%M").to_string();

    view! {
        <nav class="w-64 bg-gray-800 border-r border-gray-700 flex flex-col">
            // Logo and brand
            <div class="flex items-center space-x-3 h-16 px-6 border-b border-gray-700">
                <span class="text-2xl">"🏙"</span>
                <div>
                    <div class="text-xl font-bold text-white">"Bogor Nexus"</div>
                    <div class="text-xs text-cyan-400">"Smart City Platform"</div>
                </div>
            </div>

            // Menu entries
            <div class="flex-1 px-3 py-4 space-y-1">
                {move || {
                    let entries: Vec<(MenuItem, bool)> = state
                        .navigation
                        .with(|nav| nav.menu().map(|(item, active)| (*item, active)).collect());
                    entries
                        .into_iter()
                        .map(|(item, active)| view! { <MenuEntry item=item active=active /> })
                        .collect_view()
                }}
            </div>

            <div class="px-6 py-4 border-t border-gray-700 text-xs text-gray-500">
                "Session since " {session_start}
            </div>
        </nav>
    }
}

/// Individual menu entry
#[component]
fn MenuEntry(item: MenuItem, active: bool) -> impl IntoView {
    let state = use_context::<UiState>().expect("UiState not found");
    let base = "w-full flex items-center space-x-3 px-4 py-3 rounded-lg transition-colors";
    let class = if active {
        format!("{} bg-cyan-600/20 text-cyan-300 border border-cyan-500/40", base)
    } else {
        format!("{} text-gray-300 hover:text-white hover:bg-gray-700", base)
    };

    view! {
        <button class=class on:click=move |_| state.select(item.id)>
            <span class="text-lg">{item.icon.glyph()}</span>
            <span class="font-medium">{item.label}</span>
        </button>
    }
}
