use chrono::Utc;
use std::sync::Mutex;

pub trait Clock: Send + Sync {
    fn now_epoch_ms(&self) -> i64;
}

#[derive(Debug, Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

// Only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: Mutex<i64>,
}

impl ManualClock {
    pub fn at(now_ms: i64) -> Self {
        Self {
            now_ms: Mutex::new(now_ms),
        }
    }

    pub fn set(&self, now_ms: i64) {
        if let Ok(mut guard) = self.now_ms.lock() {
            *guard = now_ms;
        }
    }

    pub fn advance_seconds(&self, seconds: i64) {
        if let Ok(mut guard) = self.now_ms.lock() {
            *guard += seconds * 1_000;
        }
    }
}

impl Clock for ManualClock {
    fn now_epoch_ms(&self) -> i64 {
        self.now_ms.lock().map(|guard| *guard).unwrap_or_default()
    }
}
