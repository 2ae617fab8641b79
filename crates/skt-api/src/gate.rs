//! Reference-counted loading indicator.
//!
//! The indicator is shown when the first request starts and hidden when the
//! last one finishes. Overlapping requests never toggle it in between.

use parking_lot::Mutex;

use crate::error::RequestError;

/// Observer of façade activity.
///
/// Both hooks are invoked synchronously from the task issuing the request.
pub trait ApiEvents: Send + Sync {
    /// Called on the 0→1 (`true`) and 1→0 (`false`) in-flight transitions.
    fn loading_changed(&self, _visible: bool) {}

    /// Called once for every failed call, before the error is returned.
    fn request_failed(&self, _error: &RequestError) {}
}

/// Events sink that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentEvents;

impl ApiEvents for SilentEvents {}

/// In-flight counter. The lock is held while the indicator is toggled so
/// that visibility always matches `count > 0`.
#[derive(Debug, Default)]
pub struct InFlightGate {
    count: Mutex<usize>,
}

impl InFlightGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn in_flight(&self) -> usize {
        *self.count.lock()
    }

    /// Register a request. The returned guard releases it on drop, whatever
    /// the outcome of the request.
    pub fn acquire<'a>(&'a self, events: &'a dyn ApiEvents) -> InFlightGuard<'a> {
        let mut count = self.count.lock();
        *count += 1;
        if *count == 1 {
            events.loading_changed(true);
        }
        InFlightGuard { gate: self, events }
    }

    fn release(&self, events: &dyn ApiEvents) {
        let mut count = self.count.lock();
        *count = count.saturating_sub(1);
        if *count == 0 {
            events.loading_changed(false);
        }
    }
}

#[must_use = "dropping the guard immediately ends the request"]
pub struct InFlightGuard<'a> {
    gate: &'a InFlightGate,
    events: &'a dyn ApiEvents,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.gate.release(self.events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        transitions: Mutex<Vec<bool>>,
    }

    impl ApiEvents for Recorder {
        fn loading_changed(&self, visible: bool) {
            self.transitions.lock().push(visible);
        }
    }

    #[test]
    fn single_request_shows_then_hides() {
        let gate = InFlightGate::new();
        let events = Recorder::default();
        {
            let _guard = gate.acquire(&events);
            assert_eq!(gate.in_flight(), 1);
        }
        assert_eq!(gate.in_flight(), 0);
        assert_eq!(*events.transitions.lock(), vec![true, false]);
    }

    #[test]
    fn interleaved_requests_toggle_once() {
        let gate = InFlightGate::new();
        let events = Recorder::default();

        let a = gate.acquire(&events);
        let b = gate.acquire(&events);
        drop(a);
        let c = gate.acquire(&events);
        drop(b);
        assert_eq!(gate.in_flight(), 1);
        drop(c);

        assert_eq!(*events.transitions.lock(), vec![true, false]);
    }

    #[test]
    fn sequential_bursts_toggle_per_burst() {
        let gate = InFlightGate::new();
        let events = Recorder::default();

        drop(gate.acquire(&events));
        let a = gate.acquire(&events);
        let b = gate.acquire(&events);
        drop(b);
        drop(a);

        assert_eq!(*events.transitions.lock(), vec![true, false, true, false]);
    }

    #[test]
    fn visibility_tracks_count_for_every_interleaving() {
        // Every order of releasing three overlapping guards.
        let orders = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];
        for order in orders {
            let gate = InFlightGate::new();
            let events = Recorder::default();
            let mut guards: Vec<Option<InFlightGuard<'_>>> =
                (0..3).map(|_| Some(gate.acquire(&events))).collect();
            for index in order {
                guards[index] = None;
                let visible = events.transitions.lock().last().copied().unwrap_or(false);
                assert_eq!(visible, gate.in_flight() > 0, "order {order:?}");
            }
            assert_eq!(*events.transitions.lock(), vec![true, false]);
        }
    }
}
