//! Action history: human-readable records of completed warehouse mutations.

pub mod action;
pub mod log;

pub use action::Action;
pub use log::{ActionEntry, ActionLog};
