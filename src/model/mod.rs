//! Data model
//!
//! City metric records, menu definitions and the static fixtures every panel
//! draws from.

pub mod fixtures;
mod types;

pub use types::{
    DashboardData, EnvironmentMetrics, Icon, MenuItem, Panel, PopulationMetrics, TrafficMetrics,
    Trend, UtilityMetrics, MENU_ITEMS,
};
