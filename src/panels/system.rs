//! System panel: resource gauges, uptime, security and live log

use serde::Serialize;

use crate::model::fixtures::{StatTile, LOG_MESSAGES, SYSTEM_STATS};
use crate::model::Icon;
use crate::simulation::{LiveLog, ResourceMonitor, SimulationSettings, Uptime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SecurityStatus {
    Secure,
    Warning,
    Critical,
}

impl SecurityStatus {
    pub fn message(&self) -> &'static str {
        match self {
            SecurityStatus::Secure => "All Systems Secure",
            SecurityStatus::Warning => "Security Warning",
            SecurityStatus::Critical => "Critical Alert",
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            SecurityStatus::Secure => Icon::CheckCircle,
            SecurityStatus::Warning | SecurityStatus::Critical => Icon::AlertTriangle,
        }
    }
}

/// View state of the system panel.
///
/// Resources and uptime share one timer; the live log has its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemState {
    pub resources: ResourceMonitor,
    pub uptime: Uptime,
    pub security: SecurityStatus,
    pub log: LiveLog,
}

impl SystemState {
    pub fn new(settings: &SimulationSettings) -> Self {
        Self {
            resources: ResourceMonitor::default(),
            uptime: Uptime::new(settings.resources_period()),
            security: SecurityStatus::Secure,
            log: LiveLog::new(LOG_MESSAGES, settings.log_capacity),
        }
    }

    /// Uptime tile followed by the static stats
    pub fn stats(&self) -> Vec<(Icon, &'static str, String)> {
        let mut stats = vec![(Icon::Clock, "Uptime", self.uptime.display())];
        stats.extend(
            SYSTEM_STATS
                .iter()
                .map(|StatTile { icon, label, value }| (*icon, *label, value.to_string())),
        );
        stats
    }
}

impl Default for SystemState {
    fn default() -> Self {
        Self::new(&SimulationSettings::default())
    }
}
