//! Dashboard shell
//!
//! Ties the menu state machine to the mounted panel. A switch always tears
//! the old panel down (awaiting every one of its timers) before the new one
//! is mounted, so at most one panel's timers are alive at any moment.

use std::time::Duration;

use crate::model::{MenuItem, Panel};
use crate::navigation::{Navigation, Transition};
use crate::panels::PanelSnapshot;
use crate::simulation::SimulationSettings;
use crate::source::MockDataSource;

use super::mount::{ActivePanel, Mounter};

/// Extra time a capture allows past the source latency
const LOAD_GRACE: Duration = Duration::from_secs(1);

#[derive(Debug)]
pub struct Shell {
    navigation: Navigation,
    active: ActivePanel,
    mounter: Mounter,
}

impl Shell {
    /// Mount the initial panel. Must be called from within a tokio runtime.
    pub fn new(source: MockDataSource, settings: SimulationSettings) -> Self {
        let navigation = Navigation::new();
        let mut mounter = Mounter::new(source, settings);
        let active = mounter.mount(navigation.active());
        tracing::info!(panel = %navigation.active(), "shell started");

        Self {
            navigation,
            active,
            mounter,
        }
    }

    pub fn active(&self) -> Panel {
        self.navigation.active()
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub fn menu(&self) -> impl Iterator<Item = (&'static MenuItem, bool)> + '_ {
        self.navigation.menu()
    }

    pub fn mounted(&self) -> &ActivePanel {
        &self.active
    }

    /// Switch panels; re-selecting the active panel leaves its timers alone
    pub async fn select(&mut self, panel: Panel) -> Transition {
        let transition = self.navigation.select(panel);
        if let Transition::Switched { to, .. } = transition {
            self.active.unmount().await;
            self.active = self.mounter.mount(to);
        }
        transition
    }

    pub fn snapshot(&self) -> PanelSnapshot {
        self.active.snapshot()
    }

    /// Wait until the mounted dashboard has its data. Other panels have
    /// nothing to load. Returns `false` if `timeout` passes first.
    pub async fn wait_loaded(&self, timeout: Duration) -> bool {
        let ActivePanel::Dashboard(mounted) = &self.active else {
            return true;
        };
        let mut rx = mounted.subscribe();
        let loaded = async move { rx.wait_for(|s| !s.is_loading()).await.is_ok() };
        tokio::time::timeout(timeout, loaded).await.unwrap_or(false)
    }

    /// Show `panel`, let its timers run for `settle`, then return its state.
    /// A dashboard capture also waits for the source to answer.
    pub async fn capture(&mut self, panel: Panel, settle: Duration) -> PanelSnapshot {
        self.select(panel).await;
        tokio::time::sleep(settle).await;

        let timeout = self.mounter.source().latency() + LOAD_GRACE;
        if !self.wait_loaded(timeout).await {
            tracing::warn!(%panel, ?timeout, "capturing before data loaded");
        }
        self.snapshot()
    }

    /// Timer tasks still running
    pub fn live_timers(&self) -> usize {
        self.mounter.live_timers().count()
    }

    /// Stop the mounted panel's timers
    pub async fn close(mut self) {
        self.active.unmount().await;
        tracing::info!("shell closed");
    }
}
