//! Pending orders, fulfilled strictly first-in-first-out.

pub mod queue;

pub use queue::OrderQueue;
