pub mod bootstrap;
pub mod hydration;
pub mod scheduler;
