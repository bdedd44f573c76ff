//! Panel selection state machine
//!
//! Exactly one panel is active at a time. Selecting a different panel is a
//! switch (the old view is torn down and the new one mounted); selecting the
//! active panel again changes nothing.

use crate::model::{MenuItem, Panel, MENU_ITEMS};

/// Result of a menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The selected panel was already active
    Unchanged(Panel),
    /// `from` must be unmounted before `to` is mounted
    Switched { from: Panel, to: Panel },
}

impl Transition {
    pub fn is_switch(&self) -> bool {
        matches!(self, Transition::Switched { .. })
    }
}

/// Which panel the menu currently points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigation {
    active: Panel,
}

impl Navigation {
    /// Starts on the dashboard
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Panel {
        self.active
    }

    pub fn is_active(&self, panel: Panel) -> bool {
        self.active == panel
    }

    pub fn select(&mut self, panel: Panel) -> Transition {
        if self.active == panel {
            return Transition::Unchanged(panel);
        }
        let from = std::mem::replace(&mut self.active, panel);
        tracing::debug!(%from, to = %panel, "panel switched");
        Transition::Switched { from, to: panel }
    }

    /// Menu entries paired with their active flag
    pub fn menu(&self) -> impl Iterator<Item = (&'static MenuItem, bool)> + '_ {
        MENU_ITEMS
            .iter()
            .map(move |item| (item, self.is_active(item.id)))
    }
}
