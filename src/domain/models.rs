use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    pub label: String,
    // Conversational name ("Sitzphase"), used in control labels.
    pub short_name: String,
    pub base_duration_seconds: u32,
}

impl Phase {
    pub fn validate(&self) -> Result<(), String> {
        validate_non_empty(&self.label, "phase.label")?;
        validate_non_empty(&self.short_name, "phase.shortName")?;
        if self.base_duration_seconds == 0 {
            return Err("phase.baseDurationSeconds must be > 0".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseSequence {
    phases: Vec<Phase>,
}

impl PhaseSequence {
    pub fn new(phases: Vec<Phase>) -> Result<Self, String> {
        if phases.is_empty() {
            return Err("phase sequence must not be empty".to_string());
        }
        for phase in &phases {
            phase.validate()?;
        }
        Ok(Self { phases })
    }

    pub fn sit_stand() -> Self {
        Self {
            phases: vec![
                Phase {
                    label: "40 Minuten Sitzen".to_string(),
                    short_name: "Sitzphase".to_string(),
                    base_duration_seconds: 40 * 60,
                },
                Phase {
                    label: "15 Minuten Stehen".to_string(),
                    short_name: "Stehphase".to_string(),
                    base_duration_seconds: 15 * 60,
                },
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn phase_at(&self, index: usize) -> &Phase {
        &self.phases[index % self.phases.len()]
    }

    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.phases.len()
    }

    pub fn contains_index(&self, index: usize) -> bool {
        index < self.phases.len()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub body_part: String,
    pub repetitions: String,
    pub duration_seconds: u32,
    pub description: String,
}

// Present in the store only while a phase is actively counting down.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PersistedRun {
    pub run_index: usize,
    pub started_at: i64,
    #[serde(default)]
    pub adjustment_seconds: i64,
}

pub fn format_seconds(total_seconds: u64) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

fn validate_non_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field_name} must not be empty"));
    }
    Ok(())
}
