//! State Management
//!
//! The active-panel selector and the timer helper panels use to run their
//! simulators.

pub mod global;
pub mod timers;

pub use global::UiState;
pub use timers::{use_simulator, use_timeout};
