//! Terminal rendering of panel snapshots and SVG export

use chrono::{DateTime, Utc};
use std::fmt::Write;
use std::path::{Path, PathBuf};

use crate::charts::svg::{
    area_svg, bar_svg, donut_svg, gauge_svg, line_svg, network_svg, radial_svg,
};
use crate::charts::{gauge, radial_progress, DONUT_SIZE};
use crate::error::NexusResult;
use crate::model::fixtures::{
    ANOMALIES, NEURAL_METRICS, POPULATION_TREND, PREDICTION_MODELS, QUICK_ACTIONS, SERVICES,
    TRAFFIC_TREND,
};
use crate::panels::{
    AnalyticsState, CardChart, DashboardState, NeuralState, PanelSnapshot, SecurityStatus,
    SystemState,
};
use crate::simulation::Resource;

const METER_WIDTH: usize = 20;
const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
/// Log lines shown under the system panel
const LOG_TAIL: usize = 8;

const BOLD: &str = "\x1b[1m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Renders snapshots as plain text, optionally with ANSI styling
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    color: bool,
}

impl TextRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn render(&self, snapshot: &PanelSnapshot, at: DateTime<Utc>) -> String {
        let panel = snapshot.panel();
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} {} | {}  {}",
            panel.icon().glyph(),
            self.bold("Bogor Nexus"),
            panel.label(),
            at.format("%Y-%m-%d %H:%M:%S UTC")
        );
        let _ = writeln!(out, "{}", "─".repeat(60));

        match snapshot {
            PanelSnapshot::Dashboard(state) => self.dashboard(&mut out, state),
            PanelSnapshot::Analytics(state) => self.analytics(&mut out, state),
            PanelSnapshot::Neural(state) => self.neural(&mut out, state),
            PanelSnapshot::System(state) => self.system(&mut out, state),
        }
        out
    }

    fn dashboard(&self, out: &mut String, state: &DashboardState) {
        if state.is_loading() {
            let _ = writeln!(out, "Loading city metrics...");
            return;
        }

        for card in state.cards() {
            let _ = writeln!(
                out,
                "{} {:<20} {:>8}  {}  {}",
                card.icon.glyph(),
                card.title,
                card.value,
                meter(card.progress),
                card.subtitle
            );
        }
        let _ = writeln!(out);
        for tile in state.mini_stats() {
            let _ = writeln!(out, "{} {:<16} {}", tile.icon.glyph(), tile.label, tile.value);
        }
    }

    fn analytics(&self, out: &mut String, state: &AnalyticsState) {
        for kpi in state.kpis {
            let _ = writeln!(
                out,
                "{} {:<22} {:>8}  {}",
                kpi.icon.glyph(),
                kpi.title,
                kpi.value,
                kpi.subtitle
            );
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Traffic trend     {}", sparkline(&TRAFFIC_TREND));
        let _ = writeln!(out, "Population trend  {}", sparkline(&POPULATION_TREND));

        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.bold("Area distribution"));
        for arc in &state.distribution.arcs {
            let _ = writeln!(
                out,
                "  {:<16} {:>5.1}%  {}",
                arc.label,
                arc.fraction * 100.0,
                meter(arc.fraction)
            );
        }

        let _ = writeln!(out);
        for row in state.metrics {
            let _ = writeln!(
                out,
                "{} {:<22} {:>10} {} {}",
                row.icon.glyph(),
                row.label,
                row.value,
                row.trend.arrow(),
                row.change
            );
        }

        let _ = writeln!(out);
        for (label, value) in state.summary {
            let _ = writeln!(out, "  {:<24} {}", label, value);
        }
    }

    fn neural(&self, out: &mut String, state: &NeuralState) {
        let nodes: String = state
            .nodes
            .active()
            .iter()
            .map(|active| if *active { '●' } else { '○' })
            .collect();
        let _ = writeln!(
            out,
            "Nodes        {}  ({} active)",
            nodes,
            state.nodes.active_count()
        );
        let _ = writeln!(out, "Data stream  {}", sparkline(&state.stream.samples()));
        let _ = writeln!(
            out,
            "Training     {} {:>3}%",
            meter(state.training.value() as f64 / 100.0),
            state.training.value()
        );
        let _ = writeln!(out, "Predictions  {}", state.predictions.value());

        let _ = writeln!(out);
        for model in PREDICTION_MODELS.iter() {
            let _ = writeln!(
                out,
                "{} {:<24} acc {:>3}%  conf {:>3}%  {}",
                model.icon.glyph(),
                model.name,
                model.accuracy,
                model.confidence,
                model.trend.arrow()
            );
        }

        let _ = writeln!(out);
        for tile in NEURAL_METRICS.iter() {
            let _ = writeln!(out, "{} {:<20} {}", tile.icon.glyph(), tile.label, tile.value);
        }
        for anomaly in ANOMALIES.iter() {
            let _ = writeln!(
                out,
                "  {:<10} {:>3}  {}",
                anomaly.severity, anomaly.count, anomaly.status
            );
        }
    }

    fn system(&self, out: &mut String, state: &SystemState) {
        let readings = state.resources.readings();
        for resource in Resource::ALL {
            let value = readings.get(resource);
            let jitter = resource.jitter();
            let _ = writeln!(
                out,
                "{} {:<12} {:>5.1}{:<2}  {}",
                resource.icon().glyph(),
                resource.label(),
                value,
                resource.unit(),
                meter(value / jitter.max)
            );
        }

        let _ = writeln!(out);
        for (icon, label, value) in state.stats() {
            let _ = writeln!(out, "{} {:<16} {}", icon.glyph(), label, value);
        }

        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{} {}",
            state.security.icon().glyph(),
            self.status(state.security)
        );

        for service in SERVICES.iter() {
            let status = if service.operational {
                self.paint(GREEN, "online")
            } else {
                self.paint(RED, "offline")
            };
            let _ = writeln!(
                out,
                "{} {:<18} {}  {}ms",
                service.icon.glyph(),
                service.name,
                status,
                service.response_ms
            );
        }
        let actions: Vec<_> = QUICK_ACTIONS.iter().map(|a| a.name).collect();
        let _ = writeln!(out, "Actions: {}", actions.join(", "));

        let _ = writeln!(out);
        let lines = state.log.lines();
        let skip = lines.len().saturating_sub(LOG_TAIL);
        for line in &lines[skip..] {
            let _ = writeln!(out, "  {}", line);
        }
    }

    fn status(&self, status: SecurityStatus) -> String {
        match status {
            SecurityStatus::Secure => self.paint(GREEN, status.message()),
            SecurityStatus::Warning | SecurityStatus::Critical => {
                self.paint(RED, status.message())
            }
        }
    }

    fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

/// Standalone SVG documents for every chart on the panel, keyed by file stem.
///
/// A dashboard that is still loading has no charts.
pub fn svg_documents(snapshot: &PanelSnapshot) -> Vec<(String, String)> {
    match snapshot {
        PanelSnapshot::Dashboard(state) => state
            .cards()
            .iter()
            .map(|card| {
                let svg = match &card.chart {
                    CardChart::Bars(chart) => bar_svg(chart, card.accent),
                    CardChart::Line(chart) => line_svg(chart, card.accent),
                    CardChart::Radial(ring) => radial_svg(ring, card.accent),
                    CardChart::Gauge(g) => gauge_svg(g, card.accent),
                };
                (slug(card.title), svg)
            })
            .collect(),
        PanelSnapshot::Analytics(state) => vec![
            ("traffic-trend".to_string(), area_svg(&state.traffic, "#fb923c")),
            ("population-trend".to_string(), area_svg(&state.population, "#c084fc")),
            ("area-distribution".to_string(), donut_svg(&state.distribution)),
        ],
        PanelSnapshot::Neural(state) => vec![
            ("network".to_string(), network_svg(&state.network(), "#22d3ee")),
            ("data-stream".to_string(), line_svg(&state.stream_chart(), "#4ade80")),
            (
                "training".to_string(),
                radial_svg(
                    &radial_progress(state.training.value() as f64),
                    "#c084fc",
                ),
            ),
        ],
        PanelSnapshot::System(state) => Resource::ALL
            .iter()
            .map(|resource| {
                let value = state.resources.readings().get(*resource);
                let g = gauge(value, resource.jitter().max, DONUT_SIZE);
                (slug(resource.label()), gauge_svg(&g, "#22d3ee"))
            })
            .collect(),
    }
}

/// Write one `{panel}-{name}.svg` per chart plus `{panel}-manifest.json`
/// into `dir`; returns the paths written, manifest last
pub fn write_snapshot(
    snapshot: &PanelSnapshot,
    dir: &Path,
    generated_at: DateTime<Utc>,
) -> NexusResult<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let panel = snapshot.panel();

    let mut files = Vec::new();
    for (name, svg) in svg_documents(snapshot) {
        let path = dir.join(format!("{}-{}.svg", panel.id(), name));
        std::fs::write(&path, svg)?;
        files.push(path);
    }

    let manifest = serde_json::json!({
        "panel": panel.id(),
        "generated_at": generated_at.to_rfc3339(),
        "files": files
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .collect::<Vec<_>>(),
    });
    let manifest_path = dir.join(format!("{}-manifest.json", panel.id()));
    std::fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)?;
    files.push(manifest_path);

    tracing::debug!(%panel, files = files.len(), "snapshot written");
    Ok(files)
}

fn slug(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Horizontal meter for a fraction in [0, 1]
pub fn meter(fraction: f64) -> String {
    let fraction = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (fraction * METER_WIDTH as f64).round() as usize;
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(METER_WIDTH - filled)
    )
}

/// One block per percentage sample
pub fn sparkline(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| {
            let level = (v.clamp(0.0, 100.0) / 100.0 * (SPARK_LEVELS.len() - 1) as f64).round();
            SPARK_LEVELS[level as usize]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DashboardData;

    fn at() -> DateTime<Utc> {
        DateTime::from_timestamp(0, 0).unwrap()
    }

    #[test]
    fn test_meter_bounds() {
        assert_eq!(meter(0.0), "░".repeat(METER_WIDTH));
        assert_eq!(meter(1.5), "█".repeat(METER_WIDTH));
        assert_eq!(meter(f64::NAN), "░".repeat(METER_WIDTH));
        assert_eq!(meter(0.5).chars().filter(|c| *c == '█').count(), 10);
    }

    #[test]
    fn test_sparkline() {
        assert_eq!(sparkline(&[0.0, 100.0, 50.0]), "▁█▅");
        assert_eq!(sparkline(&[]), "");
    }

    #[test]
    fn test_dashboard_loading_then_ready() {
        let renderer = TextRenderer::new(false);
        let mut state = DashboardState::default();

        let loading = renderer.render(&PanelSnapshot::Dashboard(state.clone()), at());
        assert!(loading.contains("Loading city metrics"));
        assert!(loading.contains("1970-01-01 00:00:00 UTC"));

        state.loaded(DashboardData::default());
        let ready = renderer.render(&PanelSnapshot::Dashboard(state), at());
        assert!(ready.contains("Traffic Grid"));
        assert!(ready.contains("65%"));
        assert!(!ready.contains("Loading"));
    }

    #[test]
    fn test_svg_documents_per_panel() {
        let mut dashboard = DashboardState::default();
        assert!(svg_documents(&PanelSnapshot::Dashboard(dashboard.clone())).is_empty());

        dashboard.loaded(DashboardData::default());
        let docs = svg_documents(&PanelSnapshot::Dashboard(dashboard));
        assert_eq!(docs.len(), 6);
        assert_eq!(docs[0].0, "traffic-grid");
        assert!(docs.iter().all(|(_, svg)| svg.starts_with("<svg")));

        let docs = svg_documents(&PanelSnapshot::System(SystemState::default()));
        let names: Vec<_> = docs.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(
            names,
            ["cpu-usage", "memory", "storage", "network", "temperature"]
        );
    }

    #[test]
    fn test_system_without_color_has_no_escapes() {
        let text = TextRenderer::new(false).render(
            &PanelSnapshot::System(SystemState::default()),
            at(),
        );
        assert!(text.contains("All Systems Secure"));
        assert!(text.contains("CPU Usage"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_write_snapshot_loaded_dashboard() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = DashboardState::default();
        state.loaded(DashboardData::default());

        let files = write_snapshot(&PanelSnapshot::Dashboard(state), dir.path(), at()).unwrap();
        assert_eq!(files.len(), 7);
        assert!(files[..6]
            .iter()
            .all(|p| p.extension().is_some_and(|e| e == "svg")));
        assert!(dir.path().join("dashboard-traffic-grid.svg").exists());

        let svg = std::fs::read_to_string(&files[0]).unwrap();
        assert!(svg.starts_with("<svg"));

        let manifest: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&files[6]).unwrap()).unwrap();
        assert_eq!(files[6], dir.path().join("dashboard-manifest.json"));
        assert_eq!(manifest["panel"], "dashboard");
        assert_eq!(manifest["generated_at"], "1970-01-01T00:00:00+00:00");
        assert_eq!(manifest["files"].as_array().unwrap().len(), 6);
        assert_eq!(manifest["files"][0], "dashboard-traffic-grid.svg");
    }

    #[test]
    fn test_write_snapshot_system_gauges() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("out");

        let files = write_snapshot(&PanelSnapshot::System(SystemState::default()), &out, at()).unwrap();
        let names: Vec<_> = files
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .collect();
        assert_eq!(
            names,
            [
                "system-cpu-usage.svg",
                "system-memory.svg",
                "system-storage.svg",
                "system-network.svg",
                "system-temperature.svg",
                "system-manifest.json",
            ]
        );
    }

    #[test]
    fn test_write_snapshot_loading_dashboard_has_only_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let files = write_snapshot(
            &PanelSnapshot::Dashboard(DashboardState::default()),
            dir.path(),
            at(),
        )
        .unwrap();
        assert_eq!(files, vec![dir.path().join("dashboard-manifest.json")]);
    }
}
