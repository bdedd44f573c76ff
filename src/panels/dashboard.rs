//! Dashboard panel: city metric cards fed by the mock data source

use serde::Serialize;

use crate::charts::{
    bar_chart, gauge, line_chart, progress_fraction, radial_progress, BarChart, Gauge, LineChart,
    RadialProgress,
};
use crate::model::fixtures::{
    StatTile, AIR_QUALITY_TREND, AREA_LABELS, AREA_POPULATION, MINI_STATS, ROAD_CONGESTION,
    ROAD_LABELS,
};
use crate::model::{DashboardData, Icon};

/// Step between line chart samples on dashboard cards
const CARD_LINE_STEP: f64 = 20.0;
/// Outer size of the rainfall gauge
const CARD_GAUGE_SIZE: f64 = 50.0;

/// Whether the initial fetch has completed
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "lowercase")]
pub enum LoadState {
    Loading,
    Ready(DashboardData),
}

/// View state of the dashboard panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardState {
    pub load: LoadState,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            load: LoadState::Loading,
        }
    }
}

impl DashboardState {
    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    /// Replace the whole record; the dashboard never patches fields.
    pub fn loaded(&mut self, data: DashboardData) {
        self.load = LoadState::Ready(data);
    }

    pub fn data(&self) -> Option<&DashboardData> {
        match &self.load {
            LoadState::Ready(data) => Some(data),
            LoadState::Loading => None,
        }
    }

    /// Cards to show, empty while loading
    pub fn cards(&self) -> Vec<MetricCard> {
        self.data().map(metric_cards).unwrap_or_default()
    }

    pub fn mini_stats(&self) -> &'static [StatTile] {
        &MINI_STATS
    }
}

/// Visual attached to a metric card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CardChart {
    Bars(BarChart),
    Line(LineChart),
    Radial(RadialProgress),
    Gauge(Gauge),
}

/// Headline card on the dashboard grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub icon: Icon,
    pub title: &'static str,
    pub value: String,
    pub subtitle: &'static str,
    /// Accent colour (hex)
    pub accent: &'static str,
    /// Fill of the progress strip under the card, in [0, 1]
    pub progress: f64,
    pub chart: CardChart,
}

/// Build the six dashboard cards from a metric record
pub fn metric_cards(data: &DashboardData) -> Vec<MetricCard> {
    let health = data.infrastructure_health();

    vec![
        MetricCard {
            icon: Icon::Car,
            title: "Traffic Grid",
            value: format!("{}%", data.traffic.congestion),
            subtitle: "City-wide congestion",
            accent: "#fb923c",
            progress: percent(data.traffic.congestion),
            chart: CardChart::Bars(bar_chart(&ROAD_CONGESTION, &ROAD_LABELS)),
        },
        MetricCard {
            icon: Icon::Activity,
            title: "Air Quality",
            value: format!("{} AQI", data.environment.air_quality),
            subtitle: "Moderate pollution level",
            accent: "#4ade80",
            progress: percent(data.environment.air_quality),
            chart: CardChart::Line(line_chart(&AIR_QUALITY_TREND, CARD_LINE_STEP)),
        },
        MetricCard {
            icon: Icon::Zap,
            title: "Power Grid",
            value: format!("{}%", data.utilities.power_status),
            subtitle: "Stable operation",
            accent: "#facc15",
            progress: percent(data.utilities.power_status),
            chart: CardChart::Radial(radial_progress(data.utilities.power_status as f64)),
        },
        MetricCard {
            icon: Icon::Users,
            title: "Population Density",
            value: format!("{}%", data.population.density),
            subtitle: "Distribution by area",
            accent: "#c084fc",
            progress: percent(data.population.density),
            chart: CardChart::Bars(bar_chart(&AREA_POPULATION, &AREA_LABELS)),
        },
        MetricCard {
            icon: Icon::CloudRain,
            title: "Rainfall",
            value: format!("{}%", data.environment.rainfall),
            subtitle: "Precipitation intensity",
            accent: "#22d3ee",
            progress: percent(data.environment.rainfall),
            chart: CardChart::Gauge(gauge(
                data.environment.rainfall as f64,
                100.0,
                CARD_GAUGE_SIZE,
            )),
        },
        MetricCard {
            icon: Icon::AlertTriangle,
            title: "System Status",
            value: format!("{}%", health),
            subtitle: "Infrastructure health",
            accent: "#f87171",
            progress: percent(health),
            chart: CardChart::Radial(radial_progress(health as f64)),
        },
    ]
}

fn percent(value: u32) -> f64 {
    progress_fraction(value as f64, 100.0)
}
