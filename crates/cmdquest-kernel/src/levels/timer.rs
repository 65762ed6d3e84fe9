//! Deferred level advance.
//!
//! The core never sleeps. It asks the host to schedule a wake-up and the
//! host calls back with the handle when it fires.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::Serialize;

/// Identifies one scheduled wake-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TimerHandle(pub u64);

/// Host timer facility.
pub trait Timer: Send {
    /// Arrange for the host to report `handle` after `delay`.
    fn schedule_after(&mut self, delay: Duration) -> TimerHandle;

    /// Drop a scheduled wake-up. Unknown handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}

#[derive(Debug, Default)]
struct ManualState {
    next: u64,
    pending: Vec<(TimerHandle, Duration)>,
}

/// A timer that only fires when told to.
///
/// For synchronous hosts and tests. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct ManualTimer {
    state: Arc<Mutex<ManualState>>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ManualState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Scheduled and not yet fired or cancelled, in scheduling order.
    pub fn pending(&self) -> Vec<(TimerHandle, Duration)> {
        self.lock().pending.clone()
    }

    /// Remove the oldest pending wake-up and return its handle.
    pub fn fire_next(&self) -> Option<TimerHandle> {
        let mut state = self.lock();
        if state.pending.is_empty() {
            None
        } else {
            Some(state.pending.remove(0).0)
        }
    }
}

impl Timer for ManualTimer {
    fn schedule_after(&mut self, delay: Duration) -> TimerHandle {
        let mut state = self.lock();
        state.next += 1;
        let handle = TimerHandle(state.next);
        state.pending.push((handle, delay));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.lock().pending.retain(|(h, _)| *h != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_timer_lifecycle() {
        let timer = ManualTimer::new();
        let mut host = timer.clone();
        let a = host.schedule_after(Duration::from_secs(3));
        let b = host.schedule_after(Duration::from_secs(1));
        assert_ne!(a, b);
        assert_eq!(timer.pending().len(), 2);

        host.cancel(a);
        assert_eq!(timer.fire_next(), Some(b));
        assert_eq!(timer.fire_next(), None);
    }
}
