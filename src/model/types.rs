//! Core data types for the Bogor Nexus dashboard
//!
//! This module defines the fundamental types shared by every panel:
//! - `DashboardData`: the city-wide metric record served by the mock source
//! - `Panel` and `MenuItem`: the four top-level views and their menu entries
//! - `Icon` and `Trend`: closed enumerations used by cards and menus

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NexusError;

/// City-wide metric record.
///
/// Created once at load and replaced wholesale by the data source; never
/// partially updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardData {
    pub traffic: TrafficMetrics,
    pub environment: EnvironmentMetrics,
    pub utilities: UtilityMetrics,
    pub population: PopulationMetrics,
}

/// Traffic grid readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficMetrics {
    /// City-wide congestion (percent)
    pub congestion: u32,
    /// Open incidents
    pub accidents: u32,
    /// Public transport utilisation (percent)
    pub public_transport: u32,
}

/// Environmental sensor readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentMetrics {
    /// Air quality index
    pub air_quality: u32,
    /// Degrees Celsius
    pub temperature: u32,
    /// Precipitation intensity (percent)
    pub rainfall: u32,
}

/// Utility network availability, all in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilityMetrics {
    pub power_status: u32,
    pub water_supply: u32,
    pub internet_status: u32,
}

/// Population distribution, all in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationMetrics {
    pub density: u32,
    pub activity: u32,
}

impl DashboardData {
    /// Infrastructure health derived from the incident count.
    ///
    /// Each open incident costs ten points; the result saturates at zero so
    /// large incident counts never produce a negative percentage.
    pub fn infrastructure_health(&self) -> u32 {
        100u32.saturating_sub(self.traffic.accidents.saturating_mul(10))
    }
}

impl Default for DashboardData {
    fn default() -> Self {
        super::fixtures::city_metrics()
    }
}

/// Top-level dashboard views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    #[default]
    Dashboard,
    Analytics,
    Neural,
    System,
}

impl Panel {
    /// All panels in menu order
    pub const ALL: [Panel; 4] = [
        Panel::Dashboard,
        Panel::Analytics,
        Panel::Neural,
        Panel::System,
    ];

    /// Stable identifier used by menus and the CLI
    pub fn id(&self) -> &'static str {
        match self {
            Panel::Dashboard => "dashboard",
            Panel::Analytics => "analytics",
            Panel::Neural => "neural",
            Panel::System => "system",
        }
    }

    /// Human-readable menu label
    pub fn label(&self) -> &'static str {
        match self {
            Panel::Dashboard => "Dashboard",
            Panel::Analytics => "Analytics",
            Panel::Neural => "Neural Network",
            Panel::System => "System",
        }
    }

    /// Menu icon
    pub fn icon(&self) -> Icon {
        match self {
            Panel::Dashboard => Icon::LayoutDashboard,
            Panel::Analytics => Icon::BarChart,
            Panel::Neural => Icon::Brain,
            Panel::System => Icon::Settings,
        }
    }

    /// Panel that follows this one in menu order, wrapping around
    pub fn next(&self) -> Panel {
        match self {
            Panel::Dashboard => Panel::Analytics,
            Panel::Analytics => Panel::Neural,
            Panel::Neural => Panel::System,
            Panel::System => Panel::Dashboard,
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Panel {
    type Err = NexusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dashboard" => Ok(Panel::Dashboard),
            "analytics" => Ok(Panel::Analytics),
            "neural" | "neural-network" => Ok(Panel::Neural),
            "system" => Ok(Panel::System),
            other => Err(NexusError::UnknownPanel(other.to_string())),
        }
    }
}

/// Closed set of icons rendered by menus and cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    LayoutDashboard,
    BarChart,
    Brain,
    Settings,
    Car,
    Activity,
    Zap,
    Users,
    CloudRain,
    AlertTriangle,
    Wifi,
    Droplets,
    MapPin,
    Gauge,
    Clock,
    Cpu,
    Network,
    Database,
    Shield,
    HardDrive,
    RefreshCw,
    CheckCircle,
    TrendingUp,
}

impl Icon {
    /// Glyph used by text and DOM renderers
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::LayoutDashboard => "▦",
            Icon::BarChart => "📊",
            Icon::Brain => "🧠",
            Icon::Settings => "⚙",
            Icon::Car => "🚗",
            Icon::Activity => "〰",
            Icon::Zap => "⚡",
            Icon::Users => "👥",
            Icon::CloudRain => "🌧",
            Icon::AlertTriangle => "⚠",
            Icon::Wifi => "📶",
            Icon::Droplets => "💧",
            Icon::MapPin => "📍",
            Icon::Gauge => "⏱",
            Icon::Clock => "🕒",
            Icon::Cpu => "🖥",
            Icon::Network => "🌐",
            Icon::Database => "🗄",
            Icon::Shield => "🛡",
            Icon::HardDrive => "💾",
            Icon::RefreshCw => "🔄",
            Icon::CheckCircle => "✅",
            Icon::TrendingUp => "📈",
        }
    }
}

/// One navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub id: Panel,
    pub label: &'static str,
    pub icon: Icon,
}

impl MenuItem {
    const fn new(id: Panel, label: &'static str, icon: Icon) -> Self {
        Self { id, label, icon }
    }
}

/// The fixed navigation menu, in display order
pub const MENU_ITEMS: [MenuItem; 4] = [
    MenuItem::new(Panel::Dashboard, "Dashboard", Icon::LayoutDashboard),
    MenuItem::new(Panel::Analytics, "Analytics", Icon::BarChart),
    MenuItem::new(Panel::Neural, "Neural Network", Icon::Brain),
    MenuItem::new(Panel::System, "System", Icon::Settings),
];

/// Direction of change shown next to a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
            Trend::Stable => "→",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_round_trip_through_id() {
        for panel in Panel::ALL {
            assert_eq!(panel.id().parse::<Panel>().unwrap(), panel);
        }
    }

    #[test]
    fn test_unknown_panel() {
        let err = "weather".parse::<Panel>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown panel: weather");
    }

    #[test]
    fn test_menu_matches_panels() {
        for (item, panel) in MENU_ITEMS.iter().zip(Panel::ALL) {
            assert_eq!(item.id, panel);
            assert_eq!(item.label, panel.label());
            assert_eq!(item.icon, panel.icon());
        }
    }

    #[test]
    fn test_next_cycles_through_all_panels() {
        let mut panel = Panel::Dashboard;
        for expected in [Panel::Analytics, Panel::Neural, Panel::System, Panel::Dashboard] {
            panel = panel.next();
            assert_eq!(panel, expected);
        }
    }

    #[test]
    fn test_infrastructure_health_saturates() {
        let mut data = DashboardData::default();
        assert_eq!(data.infrastructure_health(), 70);

        data.traffic.accidents = 25;
        assert_eq!(data.infrastructure_health(), 0);
    }
}
