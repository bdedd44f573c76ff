//! Scoped repeating timers
//!
//! A `TimerGroup` owns every tokio task a mounted panel starts. Each timer
//! mutates the panel state through one shared `watch` sender, so writers are
//! serialized and readers always see a whole state. Shutting the group down
//! (or dropping it) cancels every task; a shared counter tracks how many
//! timers are still alive so leaks are observable.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use rand::rngs::SmallRng;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::simulation::TickOutcome;

/// Number of timer tasks currently alive across all groups sharing it
#[derive(Debug, Clone, Default)]
pub struct LiveTimers(Arc<AtomicUsize>);

impl LiveTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn register(&self) -> LiveGuard {
        self.0.fetch_add(1, Ordering::SeqCst);
        LiveGuard(self.0.clone())
    }
}

/// Held by a running task; released when the task's future is dropped
struct LiveGuard(Arc<AtomicUsize>);

impl Drop for LiveGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Timers belonging to one mounted panel
#[derive(Debug)]
pub struct TimerGroup {
    tasks: Vec<(&'static str, JoinHandle<()>)>,
    live: LiveTimers,
}

impl TimerGroup {
    pub fn new(live: LiveTimers) -> Self {
        Self {
            tasks: Vec::new(),
            live,
        }
    }

    /// Tasks started by this group that have not been shut down
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Run `step` against the shared state every `period`.
    ///
    /// The first tick fires one full period after the call. The timer stops
    /// itself when `step` returns [`TickOutcome::Done`].
    pub fn every<S, F>(
        &mut self,
        name: &'static str,
        period: Duration,
        state: Arc<watch::Sender<S>>,
        mut rng: SmallRng,
        mut step: F,
    ) where
        S: Send + Sync + 'static,
        F: FnMut(&mut S, &mut SmallRng) -> TickOutcome + Send + 'static,
    {
        self.spawn(name, async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                let mut outcome = TickOutcome::Continue;
                state.send_modify(|s| outcome = step(s, &mut rng));

                if outcome == TickOutcome::Done {
                    tracing::debug!(timer = name, "timer finished");
                    break;
                }
            }
        });
    }

    /// Run a one-shot task under the same cancellation scope
    pub fn spawn<F>(&mut self, name: &'static str, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let guard = self.live.register();
        let handle = tokio::spawn(async move {
            let _guard = guard;
            task.await;
        });
        tracing::trace!(timer = name, "timer started");
        self.tasks.push((name, handle));
    }

    /// Cancel every task and wait until each one has stopped
    pub async fn shutdown(&mut self) {
        for (_, handle) in &self.tasks {
            handle.abort();
        }
        for (name, handle) in self.tasks.drain(..) {
            if let Err(e) = handle.await {
                if e.is_panic() {
                    tracing::warn!(timer = name, "timer panicked: {}", e);
                }
            }
        }
    }
}

impl Drop for TimerGroup {
    fn drop(&mut self) {
        for (_, handle) in &self.tasks {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(1)
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_ticks_on_period() {
        let live = LiveTimers::new();
        let mut group = TimerGroup::new(live.clone());
        let (tx, rx) = watch::channel(0u32);

        group.every("count", Duration::from_millis(100), Arc::new(tx), rng(), |n, _| {
            *n += 1;
            TickOutcome::Continue
        });
        assert_eq!(live.count(), 1);

        tokio::time::sleep(Duration::from_millis(350)).await;
        assert_eq!(*rx.borrow(), 3);

        group.shutdown().await;
        assert_eq!(live.count(), 0);
        assert!(group.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_done_stops_the_timer() {
        let live = LiveTimers::new();
        let mut group = TimerGroup::new(live.clone());
        let (tx, rx) = watch::channel(0u32);

        group.every("twice", Duration::from_millis(10), Arc::new(tx), rng(), |n, _| {
            *n += 1;
            if *n == 2 {
                TickOutcome::Done
            } else {
                TickOutcome::Continue
            }
        });

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(*rx.borrow(), 2);
        assert_eq!(live.count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_tick_after_shutdown() {
        let live = LiveTimers::new();
        let mut group = TimerGroup::new(live.clone());
        let (tx, rx) = watch::channel(0u32);

        group.every("count", Duration::from_millis(100), Arc::new(tx), rng(), |n, _| {
            *n += 1;
            TickOutcome::Continue
        });
        tokio::time::sleep(Duration::from_millis(150)).await;
        group.shutdown().await;

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(*rx.borrow(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_tasks() {
        let live = LiveTimers::new();
        let mut group = TimerGroup::new(live.clone());
        group.spawn("forever", std::future::pending());
        assert_eq!(live.count(), 1);

        drop(group);
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
        assert_eq!(live.count(), 0);
    }
}
