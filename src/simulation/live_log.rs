//! Scripted system log replay

use rand::RngCore;
use serde::Serialize;

use super::{RollingWindow, Simulator, TickOutcome};

/// Emits one scripted message per tick until the script runs out
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiveLog {
    script: Vec<String>,
    cursor: usize,
    lines: RollingWindow<String>,
}

impl LiveLog {
    pub fn new<I, S>(script: I, capacity: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: script.into_iter().map(Into::into).collect(),
            cursor: 0,
            lines: RollingWindow::new(capacity),
        }
    }

    /// Lines emitted so far, oldest first, each prefixed with `[SYSTEM]`
    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().map(|l| format!("[SYSTEM] {}", l)).collect()
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.script.len()
    }
}

impl Simulator for LiveLog {
    fn tick(&mut self, _rng: &mut dyn RngCore) -> TickOutcome {
        if let Some(message) = self.script.get(self.cursor) {
            self.lines.push(message.clone());
            self.cursor += 1;
            tracing::debug!(line = %message, "live log line emitted");
        }
        if self.is_exhausted() {
            TickOutcome::Done
        } else {
            TickOutcome::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::LOG_MESSAGES;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_replays_script_once() {
        let mut rng = StepRng::new(0, 1);
        let mut log = LiveLog::new(LOG_MESSAGES, 50);

        for _ in 0..7 {
            assert_eq!(log.tick(&mut rng), TickOutcome::Continue);
        }
        assert_eq!(log.tick(&mut rng), TickOutcome::Done);
        assert_eq!(log.lines().len(), 8);
        assert_eq!(log.lines()[0], "[SYSTEM] System initialized at 08:00:00");

        log.tick(&mut rng);
        assert_eq!(log.lines().len(), 8);
    }

    #[test]
    fn test_lines_capped() {
        let mut rng = StepRng::new(0, 1);
        let mut log = LiveLog::new(LOG_MESSAGES, 3);
        while log.tick(&mut rng) == TickOutcome::Continue {}
        assert_eq!(
            log.lines(),
            vec![
                "[SYSTEM] Performance optimization running",
                "[SYSTEM] User session started - Admin",
                "[SYSTEM] API endpoints responding normally",
            ]
        );
    }

    #[test]
    fn test_empty_script_is_done() {
        let mut rng = StepRng::new(0, 1);
        let mut log = LiveLog::new(Vec::<String>::new(), 5);
        assert!(log.is_exhausted());
        assert_eq!(log.tick(&mut rng), TickOutcome::Done);
    }
}
