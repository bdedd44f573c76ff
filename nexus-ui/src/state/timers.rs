//! Panel-scoped timers
//!
//! Timers started here belong to the reactive owner that creates them: the
//! handle is moved into `on_cleanup`, so unmounting the panel drops it and
//! the browser stops calling back.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use bogor_nexus::TickOutcome;
use gloo_timers::callback::{Interval, Timeout};
use leptos::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn millis(period: Duration) -> u32 {
    period.as_millis().clamp(1, u32::MAX as u128) as u32
}

/// Run `step` against `state` every `period` until the panel unmounts or
/// `step` reports `Done`.
pub fn use_simulator<S, F>(state: RwSignal<S>, period: Duration, mut step: F)
where
    S: 'static,
    F: FnMut(&mut S, &mut SmallRng) -> TickOutcome + 'static,
{
    let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let mut rng = SmallRng::from_entropy();

    let for_tick = Rc::clone(&handle);
    let interval = Interval::new(millis(period), move || {
        let mut outcome = TickOutcome::Continue;
        state.update(|s| outcome = step(s, &mut rng));

        if outcome == TickOutcome::Done {
            // The interval cannot be dropped from inside its own callback
            let finished = Rc::clone(&for_tick);
            Timeout::new(0, move || {
                finished.borrow_mut().take();
            })
            .forget();
        }
    });
    *handle.borrow_mut() = Some(interval);

    on_cleanup(move || {
        handle.borrow_mut().take();
    });
}

/// Run `action` once after `delay` unless the panel unmounts first
pub fn use_timeout<F>(delay: Duration, action: F)
where
    F: FnOnce() + 'static,
{
    let timeout = Timeout::new(millis(delay), action);
    on_cleanup(move || drop(timeout));
}
