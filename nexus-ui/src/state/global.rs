//! Global Application State
//!
//! The only state shared across panels is which one is active. Everything a
//! panel animates lives in that panel's own signals.

use bogor_nexus::{MockDataSource, Navigation, Panel, SimulationSettings};
use leptos::*;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct UiState {
    /// Menu selection
    pub navigation: RwSignal<Navigation>,
    /// Timer periods and window sizes
    pub settings: StoredValue<SimulationSettings>,
    /// Mock metric feed
    pub source: StoredValue<MockDataSource>,
}

/// Provide global state to the component tree
pub fn provide_ui_state() {
    let state = UiState {
        navigation: create_rw_signal(Navigation::new()),
        settings: store_value(SimulationSettings::default()),
        source: store_value(MockDataSource::default()),
    };

    provide_context(state);
}

impl UiState {
    /// Switch panels; the active panel is left mounted when re-selected
    pub fn select(&self, panel: Panel) {
        if self.navigation.with_untracked(|nav| nav.is_active(panel)) {
            return;
        }
        self.navigation.update(|nav| {
            let transition = nav.select(panel);
            web_sys::console::debug_1(&format!("{:?}", transition).into());
        });
    }
}
