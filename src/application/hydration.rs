use crate::infrastructure::error::TimerError;
use crate::infrastructure::event_log::EventLog;
use crate::infrastructure::state_store::StateStore;
use std::sync::Arc;

const HYDRATION_STATE_KEY: &str = "alternatingHydrationTracker";

// One boolean per drink the host displays. Independent of phase timing; it
// only shares the durable store and its fault-tolerance policy.
pub struct HydrationTracker {
    flags: Vec<bool>,
    store: Arc<dyn StateStore>,
    log: Arc<EventLog>,
}

impl HydrationTracker {
    pub fn new(cardinality: usize, store: Arc<dyn StateStore>, log: Arc<EventLog>) -> Self {
        Self {
            flags: vec![false; cardinality],
            store,
            log,
        }
    }

    // A persisted array of any other length or element type is removed and
    // the tracker stays all-false.
    pub fn initialize(&mut self) -> bool {
        let raw = match self.store.get(HYDRATION_STATE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return false,
            Err(error) => {
                self.log.error("hydration_restore", &error.to_string());
                return false;
            }
        };

        match serde_json::from_str::<Vec<bool>>(&raw) {
            Ok(flags) if flags.len() == self.flags.len() => {
                self.flags = flags;
                true
            }
            _ => {
                if let Err(error) = self.store.remove(HYDRATION_STATE_KEY) {
                    self.log.error("hydration_restore", &error.to_string());
                }
                false
            }
        }
    }

    pub fn toggle(&mut self, index: usize) {
        if index >= self.flags.len() {
            return;
        }
        self.flags[index] = !self.flags[index];
        self.persist();
    }

    pub fn cardinality(&self) -> usize {
        self.flags.len()
    }

    pub fn consumed(&self) -> usize {
        self.flags.iter().filter(|flag| **flag).count()
    }

    pub fn is_set(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    pub fn flags(&self) -> &[bool] {
        &self.flags
    }

    fn persist(&self) {
        let result = match serde_json::to_string(&self.flags) {
            Ok(payload) => self.store.set(HYDRATION_STATE_KEY, &payload),
            Err(error) => Err(TimerError::Json(error)),
        };
        if let Err(error) = result {
            self.log.error("hydration_persist", &error.to_string());
        }
    }
}
