//! Analytics panel: static trend charts and breakdowns

use serde::Serialize;

use crate::charts::{area_chart, proportional_donut, AreaChart, DonutChart};
use crate::model::fixtures::{
    KpiCard, MetricRow, ANALYSIS_SUMMARY, AREA_DISTRIBUTION, KPI_CARDS, METRIC_ROWS,
    POPULATION_TREND, TRAFFIC_TREND,
};

const TREND_STEP: f64 = 30.0;

/// View state of the analytics panel. Nothing here changes after mount.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsState {
    pub traffic: AreaChart,
    pub population: AreaChart,
    pub distribution: DonutChart,
    #[serde(skip)]
    pub kpis: &'static [KpiCard],
    #[serde(skip)]
    pub metrics: &'static [MetricRow],
    pub summary: &'static [(&'static str, &'static str)],
}

impl Default for AnalyticsState {
    fn default() -> Self {
        let slices: Vec<(&str, f64, &str)> = AREA_DISTRIBUTION
            .iter()
            .map(|s| (s.label, s.value, s.color))
            .collect();

        Self {
            traffic: area_chart(&TRAFFIC_TREND, TREND_STEP),
            population: area_chart(&POPULATION_TREND, TREND_STEP),
            distribution: proportional_donut(&slices),
            kpis: &KPI_CARDS,
            metrics: &METRIC_ROWS,
            summary: &ANALYSIS_SUMMARY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_charts() {
        let state = AnalyticsState::default();
        assert_eq!(state.traffic.stroke.points.len(), 7);
        assert_eq!(state.traffic.stroke.view_box.width, 210.0);
        assert_eq!(state.population.stroke.points[3].y, 25.0);
    }

    #[test]
    fn test_distribution_breakdown() {
        let state = AnalyticsState::default();
        assert_eq!(state.distribution.total, 100.0);
        assert_eq!(state.distribution.arcs.len(), 5);
        assert_eq!(state.distribution.arcs[0].label, "Bogor Tengah");
        assert!((state.distribution.arcs[0].fraction - 0.25).abs() < 1e-9);
    }
}
