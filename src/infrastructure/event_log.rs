use chrono::Utc;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const LOG_FILE_NAME: &str = "scheduler.log";

// Every write is best-effort: a missing directory or full disk must never
// disturb the timer.
#[derive(Debug)]
pub struct EventLog {
    path: Option<PathBuf>,
    guard: Mutex<()>,
}

impl EventLog {
    pub fn to_directory(logs_dir: &Path) -> Self {
        Self {
            path: Some(logs_dir.join(LOG_FILE_NAME)),
            guard: Mutex::new(()),
        }
    }

    pub fn disabled() -> Self {
        Self {
            path: None,
            guard: Mutex::new(()),
        }
    }

    pub fn info(&self, operation: &str, message: &str) {
        self.append("info", operation, message);
    }

    pub fn error(&self, operation: &str, message: &str) {
        self.append("error", operation, message);
    }

    fn append(&self, level: &str, operation: &str, message: &str) {
        let Some(path) = self.path.as_ref() else {
            return;
        };
        let Ok(_guard) = self.guard.lock() else {
            return;
        };
        let payload = serde_json::json!({
            "timestamp": Utc::now().to_rfc3339(),
            "level": level,
            "operation": operation,
            "message": message,
        });

        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
            let _ = writeln!(file, "{}", payload);
        }
    }
}
