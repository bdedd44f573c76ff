//! Static mock dataset
//!
//! Every literal the panels display lives here. Nothing in this module is
//! mutable; panels copy what they need into their own view state.

use super::types::{
    DashboardData, EnvironmentMetrics, Icon, PopulationMetrics, TrafficMetrics, Trend,
    UtilityMetrics,
};

/// The record served by the mock data source
pub fn city_metrics() -> DashboardData {
    DashboardData {
        traffic: TrafficMetrics {
            congestion: 65,
            accidents: 3,
            public_transport: 78,
        },
        environment: EnvironmentMetrics {
            air_quality: 42,
            temperature: 26,
            rainfall: 85,
        },
        utilities: UtilityMetrics {
            power_status: 98,
            water_supply: 92,
            internet_status: 95,
        },
        population: PopulationMetrics {
            density: 74,
            activity: 68,
        },
    }
}

/// Small labelled figure shown in stat rows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatTile {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
}

/// Headline card with a subtitle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KpiCard {
    pub icon: Icon,
    pub title: &'static str,
    pub value: &'static str,
    pub subtitle: &'static str,
}

/// Metric row with a change figure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricRow {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
}

/// One slice of a proportional chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub label: &'static str,
    pub value: f64,
    pub color: &'static str,
}

/// Forecasting model summary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionModel {
    pub icon: Icon,
    pub name: &'static str,
    pub accuracy: u32,
    pub confidence: u32,
    pub trend: Trend,
}

/// Anomaly class with its current count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnomalyClass {
    pub severity: &'static str,
    pub count: u32,
    pub status: &'static str,
}

/// Backend service health row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Service {
    pub icon: Icon,
    pub name: &'static str,
    pub operational: bool,
    pub response_ms: u32,
}

/// Administrative shortcut
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuickAction {
    pub icon: Icon,
    pub name: &'static str,
}

// Dashboard panel

pub const ROAD_CONGESTION: [f64; 6] = [65.0, 80.0, 75.0, 60.0, 70.0, 50.0];
pub const ROAD_LABELS: [&str; 6] = ["S Kencana", "Ring Road", "Puncak", "Ciawi", "Jl Baru", "Tol"];

pub const AREA_POPULATION: [f64; 6] = [85.0, 60.0, 45.0, 70.0, 90.0, 55.0];
pub const AREA_LABELS: [&str; 6] = ["Tengah", "Utara", "Timur", "Selatan", "Barat", "Tanah Sereal"];

pub const AIR_QUALITY_TREND: [f64; 6] = [30.0, 45.0, 35.0, 50.0, 40.0, 42.0];

pub const MINI_STATS: [StatTile; 4] = [
    StatTile { icon: Icon::Wifi, label: "Network Uptime", value: "99.9%" },
    StatTile { icon: Icon::Droplets, label: "Water Supply", value: "92%" },
    StatTile { icon: Icon::MapPin, label: "Active Sensors", value: "1,247" },
    StatTile { icon: Icon::Gauge, label: "Response Time", value: "47ms" },
];

// Analytics panel

pub const TRAFFIC_TREND: [f64; 7] = [45.0, 60.0, 75.0, 85.0, 70.0, 55.0, 40.0];
pub const POPULATION_TREND: [f64; 7] = [30.0, 45.0, 60.0, 75.0, 65.0, 50.0, 35.0];

pub const AREA_DISTRIBUTION: [Slice; 5] = [
    Slice { label: "Bogor Tengah", value: 25.0, color: "#00f0ff" },
    Slice { label: "Bogor Utara", value: 20.0, color: "#00ff88" },
    Slice { label: "Bogor Timur", value: 18.0, color: "#ff00f0" },
    Slice { label: "Bogor Selatan", value: 22.0, color: "#ffaa00" },
    Slice { label: "Bogor Barat", value: 15.0, color: "#aa00ff" },
];

pub const KPI_CARDS: [KpiCard; 4] = [
    KpiCard { icon: Icon::TrendingUp, title: "Traffic Efficiency", value: "78%", subtitle: "Flow optimization" },
    KpiCard { icon: Icon::Users, title: "Public Satisfaction", value: "4.2/5", subtitle: "Citizen feedback" },
    KpiCard { icon: Icon::Clock, title: "Response Time", value: "8.3min", subtitle: "Emergency services" },
    KpiCard { icon: Icon::Activity, title: "Infrastructure Health", value: "92%", subtitle: "System status" },
];

pub const METRIC_ROWS: [MetricRow; 4] = [
    MetricRow { icon: Icon::Users, label: "Peak Population", value: "87%", change: "+5.2%", trend: Trend::Up },
    MetricRow { icon: Icon::Car, label: "Avg Traffic Speed", value: "28 km/h", change: "-2.1%", trend: Trend::Down },
    MetricRow { icon: Icon::CloudRain, label: "Rainfall Today", value: "45mm", change: "+12%", trend: Trend::Up },
    MetricRow { icon: Icon::Activity, label: "Air Quality", value: "Moderate", change: "Stable", trend: Trend::Stable },
];

pub const ANALYSIS_SUMMARY: [(&str, &str); 4] = [
    ("Data Points", "24.7K"),
    ("Analysis Complete", "98%"),
    ("Prediction Accuracy", "94.2%"),
    ("Update Frequency", "Real-time"),
];

// Neural panel

pub const PREDICTION_MODELS: [PredictionModel; 4] = [
    PredictionModel { icon: Icon::Cpu, name: "Traffic Flow", accuracy: 92, confidence: 88, trend: Trend::Up },
    PredictionModel { icon: Icon::Network, name: "Population Movement", accuracy: 87, confidence: 85, trend: Trend::Stable },
    PredictionModel { icon: Icon::CloudRain, name: "Weather Patterns", accuracy: 94, confidence: 91, trend: Trend::Up },
    PredictionModel { icon: Icon::Zap, name: "Utility Demand", accuracy: 89, confidence: 86, trend: Trend::Down },
];

pub const NEURAL_METRICS: [StatTile; 4] = [
    StatTile { icon: Icon::Cpu, label: "Processing Power", value: "78%" },
    StatTile { icon: Icon::Brain, label: "Memory Usage", value: "64%" },
    StatTile { icon: Icon::Network, label: "Data Throughput", value: "2.4GB/s" },
    StatTile { icon: Icon::Database, label: "Active Models", value: "12" },
];

pub const ANOMALIES: [AnomalyClass; 4] = [
    AnomalyClass { severity: "Critical", count: 0, status: "normal" },
    AnomalyClass { severity: "Warning", count: 3, status: "monitoring" },
    AnomalyClass { severity: "Minor", count: 12, status: "stable" },
    AnomalyClass { severity: "Informational", count: 47, status: "optimal" },
];

// System panel

pub const SERVICES: [Service; 6] = [
    Service { icon: Icon::BarChart, name: "Dashboard API", operational: true, response_ms: 28 },
    Service { icon: Icon::Database, name: "Data Stream", operational: true, response_ms: 42 },
    Service { icon: Icon::Cpu, name: "Neural Network", operational: true, response_ms: 156 },
    Service { icon: Icon::Shield, name: "Security Layer", operational: true, response_ms: 15 },
    Service { icon: Icon::Users, name: "User Management", operational: true, response_ms: 22 },
    Service { icon: Icon::HardDrive, name: "Backup Service", operational: true, response_ms: 89 },
];

pub const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction { icon: Icon::RefreshCw, name: "System Refresh" },
    QuickAction { icon: Icon::Activity, name: "Run Diagnostics" },
    QuickAction { icon: Icon::Shield, name: "Security Scan" },
    QuickAction { icon: Icon::Zap, name: "Performance Boost" },
];

pub const SYSTEM_STATS: [StatTile; 3] = [
    StatTile { icon: Icon::Users, label: "Active Users", value: "3" },
    StatTile { icon: Icon::Network, label: "API Calls", value: "2.4K/min" },
    StatTile { icon: Icon::Database, label: "Data Processed", value: "1.2TB" },
];

pub const LOG_MESSAGES: [&str; 8] = [
    "System initialized at 08:00:00",
    "Neural network model loaded",
    "Data stream connected - 2.4GB/s",
    "Security scan completed - No threats",
    "Backup created successfully",
    "Performance optimization running",
    "User session started - Admin",
    "API endpoints responding normally",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_metrics_values() {
        let data = city_metrics();
        assert_eq!(data.traffic.congestion, 65);
        assert_eq!(data.environment.air_quality, 42);
        assert_eq!(data.utilities.power_status, 98);
        assert_eq!(data.population.density, 74);
    }

    #[test]
    fn test_area_distribution_total() {
        let total: f64 = AREA_DISTRIBUTION.iter().map(|s| s.value).sum();
        assert_eq!(total, 100.0);
    }
}
