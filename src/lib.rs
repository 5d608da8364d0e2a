pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::hydration::HydrationTracker;
pub use application::scheduler::{
    ADJUSTMENT_STEP_SECONDS, MIN_RUN_DURATION_SECONDS, RunScheduler, SchedulerPorts,
    TICK_INTERVAL_MS,
};
pub use domain::catalog::default_exercises;
pub use domain::models::{Exercise, PersistedRun, Phase, PhaseSequence, format_seconds};
pub use infrastructure::clock::{Clock, ManualClock, SystemClock};
pub use infrastructure::error::TimerError;
pub use infrastructure::event_log::EventLog;
pub use infrastructure::render::{NullRenderSink, RenderSink};
pub use infrastructure::sound::{NullSoundSink, SoundSink};
pub use infrastructure::state_store::{FileStateStore, InMemoryStateStore, StateStore};
pub use infrastructure::ticker::{ManualTickScheduler, TickHandle, TickScheduler};
