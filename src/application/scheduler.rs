use crate::domain::models::{Exercise, PersistedRun, Phase, PhaseSequence, format_seconds};
use crate::infrastructure::clock::Clock;
use crate::infrastructure::error::TimerError;
use crate::infrastructure::event_log::EventLog;
use crate::infrastructure::render::RenderSink;
use crate::infrastructure::sound::SoundSink;
use crate::infrastructure::state_store::StateStore;
use crate::infrastructure::ticker::{TickHandle, TickScheduler};
use rand::Rng;
use std::sync::Arc;

pub const ADJUSTMENT_STEP_SECONDS: i64 = 5 * 60;
pub const MIN_RUN_DURATION_SECONDS: i64 = 60;
pub const TICK_INTERVAL_MS: u64 = 1_000;

const RUN_STATE_KEY: &str = "alternatingTimerState";

pub struct SchedulerPorts {
    pub render: Arc<dyn RenderSink>,
    pub sound: Arc<dyn SoundSink>,
    pub store: Arc<dyn StateStore>,
    pub clock: Arc<dyn Clock>,
    pub ticker: Arc<dyn TickScheduler>,
    pub log: Arc<EventLog>,
}

// Remaining time is always reconstructed from the start instant against
// the wall clock, so a late tick or a host reload lands on the same answer.
pub struct RunScheduler {
    phases: PhaseSequence,
    exercises: Vec<Exercise>,
    current_index: usize,
    adjustment_seconds: i64,
    started_at: Option<i64>,
    tick_handle: Option<TickHandle>,
    last_exercise_id: Option<String>,
    render: Arc<dyn RenderSink>,
    sound: Arc<dyn SoundSink>,
    store: Arc<dyn StateStore>,
    clock: Arc<dyn Clock>,
    ticker: Arc<dyn TickScheduler>,
    log: Arc<EventLog>,
}

impl RunScheduler {
    pub fn new(phases: PhaseSequence, exercises: Vec<Exercise>, ports: SchedulerPorts) -> Self {
        Self {
            phases,
            exercises,
            current_index: 0,
            adjustment_seconds: 0,
            started_at: None,
            tick_handle: None,
            last_exercise_id: None,
            render: ports.render,
            sound: ports.sound,
            store: ports.store,
            clock: ports.clock,
            ticker: ports.ticker,
            log: ports.log,
        }
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn current_phase_index(&self) -> usize {
        self.current_index
    }

    pub fn adjustment_seconds(&self) -> i64 {
        self.adjustment_seconds
    }

    pub fn effective_duration_seconds(&self) -> i64 {
        let base = self.current_phase().base_duration_seconds as i64;
        (base + self.adjustment_seconds).max(MIN_RUN_DURATION_SECONDS)
    }

    pub fn remaining_seconds(&self) -> i64 {
        let duration = self.effective_duration_seconds();
        match self.started_at {
            Some(started_at) => {
                let elapsed = ((self.clock.now_epoch_ms() - started_at) / 1_000).max(0);
                (duration - elapsed).max(0)
            }
            None => duration,
        }
    }

    pub fn initialize(&mut self) -> bool {
        if self.restore_from_store() {
            return true;
        }
        self.show_exercise_for_current_phase();
        self.reset_remaining_for_current_phase();
        self.enter_idle();
        false
    }

    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.begin_running(false);
        self.log
            .info("start", &format!("started phase {}", self.current_index));
    }

    // Unlike natural completion, the next phase starts running immediately.
    pub fn skip(&mut self) {
        self.cancel_tick();
        self.started_at = None;
        self.current_index = self.phases.next_index(self.current_index);
        self.reset_remaining_for_current_phase();
        self.show_exercise_for_current_phase();
        self.begin_running(false);
        self.log
            .info("skip", &format!("skipped into phase {}", self.current_index));
    }

    pub fn tick(&mut self) {
        if !self.is_running() {
            return;
        }
        let remaining = self.remaining_seconds();
        self.render.show_remaining(&format_seconds(remaining as u64));
        if remaining <= 0 {
            self.cancel_tick();
            self.sound.play_completion_cue();
            self.advance_phase();
        }
    }

    // The realized adjustment is the difference from base, so a request the
    // floor already absorbed changes nothing and writes nothing.
    pub fn adjust(&mut self, delta_seconds: i64) {
        let base = self.current_phase().base_duration_seconds as i64;
        let target = (base + self.adjustment_seconds + delta_seconds).max(MIN_RUN_DURATION_SECONDS);
        let next_adjustment = target - base;
        if next_adjustment == self.adjustment_seconds {
            return;
        }
        self.adjustment_seconds = next_adjustment;

        if self.is_running() {
            let remaining = self.remaining_seconds();
            self.render.show_remaining(&format_seconds(remaining as u64));
            if remaining <= 0 {
                self.cancel_tick();
                self.sound.play_completion_cue();
                self.advance_phase();
                return;
            }
        } else {
            self.render.show_remaining(&format_seconds(target as u64));
        }

        self.persist_run_state();
    }

    fn current_phase(&self) -> &Phase {
        self.phases.phase_at(self.current_index)
    }

    // A corrupt or out-of-range record is removed and treated as absent; an
    // expired one advances exactly one phase and stays idle.
    fn restore_from_store(&mut self) -> bool {
        let raw = match self.store.get(RUN_STATE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return false,
            Err(error) => {
                self.log.error("restore", &error.to_string());
                return false;
            }
        };

        let record = match serde_json::from_str::<PersistedRun>(&raw) {
            Ok(record) => record,
            Err(_) => {
                self.remove_run_state();
                return false;
            }
        };
        if !self.phases.contains_index(record.run_index) {
            self.remove_run_state();
            return false;
        }

        let base = self.phases.phase_at(record.run_index).base_duration_seconds as i64;
        let duration = (base + record.adjustment_seconds).max(MIN_RUN_DURATION_SECONDS);
        let normalized_adjustment = duration - base;
        let elapsed = ((self.clock.now_epoch_ms() - record.started_at) / 1_000).max(0);

        if elapsed >= duration {
            self.current_index = self.phases.next_index(record.run_index);
            self.adjustment_seconds = 0;
            self.started_at = None;
            self.remove_run_state();
            self.log.info(
                "restore",
                &format!("expired run fast-forwarded to phase {}", self.current_index),
            );
            return false;
        }

        self.current_index = record.run_index;
        self.started_at = Some(record.started_at);
        self.adjustment_seconds = normalized_adjustment;
        self.show_exercise_for_current_phase();
        self.begin_running(true);
        self.log.info(
            "restore",
            &format!("resumed phase {} mid-run", self.current_index),
        );
        true
    }

    // A preserved start instant keeps elapsed time continuous across a reload.
    fn begin_running(&mut self, preserve_start: bool) {
        self.cancel_tick();
        if !preserve_start {
            self.started_at = Some(self.clock.now_epoch_ms());
        }
        self.render_running_state();
        self.render
            .show_remaining(&format_seconds(self.remaining_seconds() as u64));
        match self.ticker.schedule(TICK_INTERVAL_MS) {
            Ok(handle) => self.tick_handle = Some(handle),
            Err(error) => self.log.error("schedule", &error.to_string()),
        }
        self.persist_run_state();
    }

    fn enter_idle(&mut self) {
        self.cancel_tick();
        self.started_at = None;
        let phase = self.current_phase();
        self.render
            .show_phase_label(&format!("Als Nächstes: {}", phase.label));
        self.render
            .show_control_state(&format!("{} starten", phase.short_name), true);
        self.persist_run_state();
    }

    fn render_running_state(&self) {
        let phase = self.current_phase();
        self.render.show_phase_label(&format!("Aktiv: {}", phase.label));
        self.render.show_control_state("Laufend …", false);
    }

    fn advance_phase(&mut self) {
        self.current_index = self.phases.next_index(self.current_index);
        self.reset_remaining_for_current_phase();
        self.show_exercise_for_current_phase();
        self.enter_idle();
        self.log
            .info("advance", &format!("entered phase {}", self.current_index));
    }

    fn reset_remaining_for_current_phase(&mut self) {
        self.adjustment_seconds = 0;
        self.render
            .show_remaining(&format_seconds(self.effective_duration_seconds() as u64));
    }

    // With two or more entries the previous exercise is swapped for the
    // first alternative when drawn again.
    fn select_random_exercise(&self) -> Option<Exercise> {
        if self.exercises.is_empty() {
            return None;
        }
        if self.exercises.len() == 1 {
            return Some(self.exercises[0].clone());
        }

        let mut rng = rand::thread_rng();
        let candidate = &self.exercises[rng.gen_range(0..self.exercises.len())];
        if Some(candidate.id.as_str()) == self.last_exercise_id.as_deref() {
            let replacement = self
                .exercises
                .iter()
                .find(|exercise| Some(exercise.id.as_str()) != self.last_exercise_id.as_deref());
            return Some(replacement.unwrap_or(candidate).clone());
        }
        Some(candidate.clone())
    }

    fn show_exercise_for_current_phase(&mut self) {
        match self.select_random_exercise() {
            Some(exercise) => {
                self.last_exercise_id = Some(exercise.id.clone());
                self.render.show_exercise(Some(&exercise));
            }
            None => self.render.show_exercise(None),
        }
    }

    // A record while running, no record while idle. Failures are logged and
    // swallowed; in-memory state stays authoritative.
    fn persist_run_state(&self) {
        let result = match self.started_at {
            Some(started_at) => {
                let record = PersistedRun {
                    run_index: self.current_index,
                    started_at,
                    adjustment_seconds: self.adjustment_seconds,
                };
                match serde_json::to_string(&record) {
                    Ok(payload) => self.store.set(RUN_STATE_KEY, &payload),
                    Err(error) => Err(TimerError::Json(error)),
                }
            }
            None => self.store.remove(RUN_STATE_KEY),
        };

        if let Err(error) = result {
            self.log.error("persist", &error.to_string());
        }
    }

    fn remove_run_state(&self) {
        if let Err(error) = self.store.remove(RUN_STATE_KEY) {
            self.log.error("persist", &error.to_string());
        }
    }

    fn cancel_tick(&mut self) {
        if let Some(handle) = self.tick_handle.take() {
            self.ticker.cancel(handle);
        }
    }
}
