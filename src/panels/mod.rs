//! Panel View State
//!
//! One module per top-level view. Each panel state is plain data: it can be
//! ticked by simulators, cloned into a snapshot, and rendered by any surface.

pub mod analytics;
pub mod dashboard;
pub mod neural;
pub mod system;

pub use analytics::AnalyticsState;
pub use dashboard::{metric_cards, CardChart, DashboardState, LoadState, MetricCard};
pub use neural::NeuralState;
pub use system::{SecurityStatus, SystemState};

use serde::Serialize;

use crate::model::Panel;

/// Point-in-time copy of whichever panel is active
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "panel", rename_all = "lowercase")]
pub enum PanelSnapshot {
    Dashboard(DashboardState),
    Analytics(AnalyticsState),
    Neural(NeuralState),
    System(SystemState),
}

impl PanelSnapshot {
    pub fn panel(&self) -> Panel {
        match self {
            PanelSnapshot::Dashboard(_) => Panel::Dashboard,
            PanelSnapshot::Analytics(_) => Panel::Analytics,
            PanelSnapshot::Neural(_) => Panel::Neural,
            PanelSnapshot::System(_) => Panel::System,
        }
    }
}
