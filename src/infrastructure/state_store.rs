use crate::infrastructure::error::TimerError;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

// Every call may fail; callers on the scheduler's runtime path treat
// failures as non-fatal.
pub trait StateStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, TimerError>;
    fn set(&self, key: &str, value: &str) -> Result<(), TimerError>;
    fn remove(&self, key: &str) -> Result<(), TimerError>;
}

// One JSON file per key under a state directory.
#[derive(Debug, Clone)]
pub struct FileStateStore {
    state_dir: PathBuf,
}

impl FileStateStore {
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self {
            state_dir: state_dir.into(),
        }
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf, TimerError> {
        if key.trim().is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(TimerError::InvalidConfig(format!(
                "store key must be non-empty alphanumeric: {key:?}"
            )));
        }
        Ok(self.state_dir.join(format!("{key}.json")))
    }
}

impl StateStore for FileStateStore {
    fn get(&self, key: &str) -> Result<Option<String>, TimerError> {
        match fs::read_to_string(self.entry_path(key)?) {
            Ok(raw) => Ok(Some(raw)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(TimerError::Io(error)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), TimerError> {
        fs::write(self.entry_path(key)?, value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), TimerError> {
        match fs::remove_file(self.entry_path(key)?) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(TimerError::Io(error)),
        }
    }
}

#[derive(Debug, Default)]
pub struct InMemoryStateStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryStateStore {
    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, TimerError> {
        self.entries
            .lock()
            .map_err(|error| TimerError::InvalidConfig(format!("in-memory lock poisoned: {error}")))
    }
}

impl StateStore for InMemoryStateStore {
    fn get(&self, key: &str) -> Result<Option<String>, TimerError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), TimerError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), TimerError> {
        self.lock()?.remove(key);
        Ok(())
    }
}
