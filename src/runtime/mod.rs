//! Native runtime
//!
//! Drives the simulators with tokio timers and owns the mounted panel.

mod mount;
mod shell;
mod timer;

pub use mount::{ActivePanel, Mounted, Mounter};
pub use shell::Shell;
pub use timer::{LiveTimers, TimerGroup};
