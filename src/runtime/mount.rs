//! Mounted panels
//!
//! Mounting a panel creates its state channel and starts the timers that
//! feed it. Every timer lives in the panel's `TimerGroup`, so unmounting
//! stops all of them at once.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use tokio::sync::watch;

use super::timer::{LiveTimers, TimerGroup};
use crate::model::Panel;
use crate::panels::{AnalyticsState, DashboardState, NeuralState, PanelSnapshot, SystemState};
use crate::simulation::{SimulationSettings, Simulator, TickOutcome};
use crate::source::MockDataSource;

/// A panel's live state plus the timers that own it
#[derive(Debug)]
pub struct Mounted<S> {
    state: Arc<watch::Sender<S>>,
    timers: TimerGroup,
}

impl<S: Clone> Mounted<S> {
    fn new(initial: S, live: LiveTimers) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self {
            state: Arc::new(tx),
            timers: TimerGroup::new(live),
        }
    }

    /// Copy of the current state
    pub fn state(&self) -> S {
        self.state.borrow().clone()
    }

    /// Receiver notified on every timer write
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.state.subscribe()
    }

    pub fn timers(&self) -> usize {
        self.timers.len()
    }

    async fn unmount(&mut self) {
        self.timers.shutdown().await;
    }
}

/// The one panel currently on screen
#[derive(Debug)]
pub enum ActivePanel {
    Dashboard(Mounted<DashboardState>),
    Analytics(Mounted<AnalyticsState>),
    Neural(Mounted<NeuralState>),
    System(Mounted<SystemState>),
}

impl ActivePanel {
    pub fn panel(&self) -> Panel {
        match self {
            ActivePanel::Dashboard(_) => Panel::Dashboard,
            ActivePanel::Analytics(_) => Panel::Analytics,
            ActivePanel::Neural(_) => Panel::Neural,
            ActivePanel::System(_) => Panel::System,
        }
    }

    pub fn snapshot(&self) -> PanelSnapshot {
        match self {
            ActivePanel::Dashboard(m) => PanelSnapshot::Dashboard(m.state()),
            ActivePanel::Analytics(m) => PanelSnapshot::Analytics(m.state()),
            ActivePanel::Neural(m) => PanelSnapshot::Neural(m.state()),
            ActivePanel::System(m) => PanelSnapshot::System(m.state()),
        }
    }

    /// Stop every timer the panel started
    pub async fn unmount(&mut self) {
        match self {
            ActivePanel::Dashboard(m) => m.unmount().await,
            ActivePanel::Analytics(m) => m.unmount().await,
            ActivePanel::Neural(m) => m.unmount().await,
            ActivePanel::System(m) => m.unmount().await,
        }
        tracing::debug!(panel = %self.panel(), "panel unmounted");
    }
}

type NeuralStep = fn(&mut NeuralState, &mut SmallRng) -> TickOutcome;

/// Builds panels and starts their timers
#[derive(Debug)]
pub struct Mounter {
    source: MockDataSource,
    settings: SimulationSettings,
    live: LiveTimers,
    rng: SmallRng,
}

impl Mounter {
    pub fn new(source: MockDataSource, settings: SimulationSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self {
            source,
            settings,
            live: LiveTimers::new(),
            rng,
        }
    }

    pub fn live_timers(&self) -> &LiveTimers {
        &self.live
    }

    pub fn source(&self) -> &MockDataSource {
        &self.source
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    /// Must be called from within a tokio runtime
    pub fn mount(&mut self, panel: Panel) -> ActivePanel {
        tracing::debug!(%panel, "mounting panel");
        match panel {
            Panel::Dashboard => ActivePanel::Dashboard(self.dashboard()),
            Panel::Analytics => ActivePanel::Analytics(self.analytics()),
            Panel::Neural => ActivePanel::Neural(self.neural()),
            Panel::System => ActivePanel::System(self.system()),
        }
    }

    /// Independent stream per timer so one timer's draws never shift another's
    fn fork_rng(&mut self) -> SmallRng {
        SmallRng::seed_from_u64(self.rng.next_u64())
    }

    fn dashboard(&mut self) -> Mounted<DashboardState> {
        let mut mounted = Mounted::new(DashboardState::default(), self.live.clone());
        let state = mounted.state.clone();
        let source = self.source.clone();

        mounted.timers.spawn("dashboard-fetch", async move {
            let data = source.fetch().await;
            state.send_modify(|s| s.loaded(data));
            tracing::info!(congestion = data.traffic.congestion, "city metrics loaded");
        });
        mounted
    }

    fn analytics(&mut self) -> Mounted<AnalyticsState> {
        Mounted::new(AnalyticsState::default(), self.live.clone())
    }

    fn neural(&mut self) -> Mounted<NeuralState> {
        let settings = self.settings.clone();
        let mut mounted = Mounted::new(NeuralState::new(&settings), self.live.clone());
        let timers: [(&'static str, Duration, NeuralStep); 4] = [
            ("node-activity", settings.node_activity_period(), |s, r| {
                s.nodes.tick(r)
            }),
            ("data-stream", settings.data_stream_period(), |s, r| {
                s.stream.tick(r)
            }),
            ("training", settings.training_period(), |s, r| s.training.tick(r)),
            ("predictions", settings.prediction_period(), |s, r| {
                s.predictions.tick(r)
            }),
        ];

        for (name, period, step) in timers {
            let rng = self.fork_rng();
            mounted
                .timers
                .every(name, period, mounted.state.clone(), rng, step);
        }
        mounted
    }

    fn system(&mut self) -> Mounted<SystemState> {
        let settings = self.settings.clone();
        let mut mounted = Mounted::new(SystemState::new(&settings), self.live.clone());

        let rng = self.fork_rng();
        mounted.timers.every(
            "resources",
            settings.resources_period(),
            mounted.state.clone(),
            rng,
            |s: &mut SystemState, r| {
                s.resources.tick(r);
                s.uptime.tick(r);
                TickOutcome::Continue
            },
        );

        let rng = self.fork_rng();
        mounted.timers.every(
            "live-log",
            settings.live_log_period(),
            mounted.state.clone(),
            rng,
            |s: &mut SystemState, r| s.log.tick(r),
        );
        mounted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounter() -> Mounter {
        let settings = SimulationSettings {
            seed: Some(7),
            ..Default::default()
        };
        Mounter::new(MockDataSource::default(), settings)
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_counts_per_panel() {
        let mut mounter = mounter();
        for (panel, expected) in [
            (Panel::Dashboard, 1),
            (Panel::Analytics, 0),
            (Panel::Neural, 4),
            (Panel::System, 2),
        ] {
            let mut active = mounter.mount(panel);
            assert_eq!(mounter.live_timers().count(), expected, "{panel}");
            active.unmount().await;
            assert_eq!(mounter.live_timers().count(), 0, "{panel}");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_neural_counters_advance() {
        let mut mounter = mounter();
        let active = mounter.mount(Panel::Neural);

        tokio::time::sleep(Duration::from_millis(2050)).await;

        let ActivePanel::Neural(m) = &active else {
            panic!("expected neural panel");
        };
        let state = m.state();
        assert_eq!(state.training.value(), 5);
        assert_eq!(state.predictions.value(), 20);
        assert_eq!(state.stream.samples().len(), 10);
    }

    #[tokio::test(start_paused = true)]
    async fn test_system_log_and_uptime() {
        let mut mounter = mounter();
        let active = mounter.mount(Panel::System);

        tokio::time::sleep(Duration::from_millis(4100)).await;

        let PanelSnapshot::System(state) = active.snapshot() else {
            panic!("expected system snapshot");
        };
        assert_eq!(state.log.lines().len(), 2);
        assert_eq!(state.uptime.elapsed(), Duration::from_secs(4));
    }
}
