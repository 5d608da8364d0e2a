use crate::infrastructure::error::TimerError;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickHandle(u64);

impl TickHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(self) -> u64 {
        self.0
    }
}

// The scheduler owns at most one live handle at a time and cancels it
// before requesting another; hosts deliver each fire by calling tick().
pub trait TickScheduler: Send + Sync {
    fn schedule(&self, interval_ms: u64) -> Result<TickHandle, TimerError>;
    fn cancel(&self, handle: TickHandle);
}

// Records what is currently scheduled; polling hosts and tests read the
// active interval and drive ticks themselves.
#[derive(Debug, Default)]
pub struct ManualTickScheduler {
    next_id: AtomicU64,
    active: Mutex<Option<(u64, u64)>>,
}

impl ManualTickScheduler {
    pub fn is_active(&self) -> bool {
        self.active
            .lock()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }

    pub fn active_interval_ms(&self) -> Option<u64> {
        self.active
            .lock()
            .ok()
            .and_then(|guard| guard.map(|(_, interval_ms)| interval_ms))
    }
}

impl TickScheduler for ManualTickScheduler {
    fn schedule(&self, interval_ms: u64) -> Result<TickHandle, TimerError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut guard = self
            .active
            .lock()
            .map_err(|error| TimerError::InvalidConfig(format!("ticker lock poisoned: {error}")))?;
        *guard = Some((id, interval_ms));
        Ok(TickHandle::new(id))
    }

    fn cancel(&self, handle: TickHandle) {
        if let Ok(mut guard) = self.active.lock() {
            if guard.map(|(id, _)| id) == Some(handle.id()) {
                *guard = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_replaces_active_source_and_hands_out_fresh_ids() {
        let ticker = ManualTickScheduler::default();
        let first = ticker.schedule(1_000).expect("schedule");
        let second = ticker.schedule(1_000).expect("schedule");
        assert_ne!(first, second);
        assert!(ticker.is_active());
        assert_eq!(ticker.active_interval_ms(), Some(1_000));
    }

    #[test]
    fn cancel_clears_only_the_matching_handle() {
        let ticker = ManualTickScheduler::default();
        let stale = ticker.schedule(1_000).expect("schedule");
        let live = ticker.schedule(1_000).expect("schedule");

        ticker.cancel(stale);
        assert!(ticker.is_active());

        ticker.cancel(live);
        assert!(!ticker.is_active());
    }
}
