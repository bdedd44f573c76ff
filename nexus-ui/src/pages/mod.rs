//! Pages
//!
//! One component per top-level panel.

pub mod analytics;
pub mod dashboard;
pub mod neural;
pub mod system;

pub use analytics::AnalyticsPanel;
pub use dashboard::DashboardPanel;
pub use neural::NeuralPanel;
pub use system::SystemPanel;
