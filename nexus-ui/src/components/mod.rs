//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod charts;
pub mod loading;
pub mod metric_card;
pub mod sidebar;

pub use charts::{AreaChartView, DonutView, GaugeView, LineChartView, NetworkView};
pub use loading::{CardSkeleton, Loading};
pub use metric_card::{MetricCardView, StatTileView};
pub use sidebar::Sidebar;
