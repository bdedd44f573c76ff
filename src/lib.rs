//! # Bogor Nexus
//!
//! Smart city dashboard core: a static mock metric record, pure chart
//! geometry, timer-driven mock simulators and the panel selection state
//! machine shared by the browser dashboard and the `nexus` CLI.
//!
//! ## Modules
//!
//! - [`model`]: city metrics, panels, menu entries and the fixture dataset
//! - [`source`]: mock data source with simulated latency
//! - [`charts`]: line, area, bar, donut, radial and network geometry plus SVG output
//! - [`simulation`]: jittered gauges, rolling windows and counters
//! - [`panels`]: per-panel view state
//! - [`navigation`]: which panel is active
//! - [`runtime`]: tokio timers with scoped cancellation (feature `runtime`)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bogor_nexus::{MockDataSource, Panel, PanelSnapshot, Shell, SimulationSettings};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut shell = Shell::new(MockDataSource::default(), SimulationSettings::default());
//!
//!     // The dashboard shows a loading state until the source answers
//!     tokio::time::sleep(std::time::Duration::from_millis(1000)).await;
//!     if let PanelSnapshot::Dashboard(state) = shell.snapshot() {
//!         println!("{} cards", state.cards().len());
//!     }
//!
//!     // Switching tears the dashboard down before the neural panel starts
//!     shell.select(Panel::Neural).await;
//!     shell.close().await;
//! }
//! ```

pub mod charts;
pub mod error;
pub mod model;
pub mod navigation;
pub mod panels;
pub mod simulation;
pub mod source;

#[cfg(feature = "runtime")]
pub mod config;
#[cfg(feature = "runtime")]
pub mod logging;
#[cfg(feature = "runtime")]
pub mod render;
#[cfg(feature = "runtime")]
pub mod runtime;

// Re-export top-level types for convenience
pub use error::{NexusError, NexusResult};

pub use model::{DashboardData, Icon, MenuItem, Panel, Trend, MENU_ITEMS};

pub use navigation::{Navigation, Transition};

pub use panels::{AnalyticsState, DashboardState, NeuralState, PanelSnapshot, SystemState};

pub use simulation::{SimulationSettings, Simulator, TickOutcome};

pub use source::MockDataSource;

#[cfg(feature = "runtime")]
pub use config::{Config, ConfigError};

#[cfg(feature = "runtime")]
pub use runtime::{LiveTimers, Shell};
