pub mod clock;
pub mod error;
pub mod event_log;
pub mod render;
pub mod sound;
pub mod state_store;
pub mod ticker;
