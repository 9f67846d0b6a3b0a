//! `warehouse-engine` — the warehouse facade.
//!
//! Owns one category catalog, one order queue and one action log, and exposes
//! the whole operation surface used by front ends:
//!
//! - `add_category` / `add_item` / `enqueue_order` (mutations)
//! - `process_next_order` (fulfilment of exactly one pending order)
//! - `dump_state` / `snapshot` (read-only reporting)
//!
//! Every operation runs to completion synchronously. The engine is a plain
//! value: callers sharing one across threads must wrap each whole operation in
//! their own lock.

pub mod config;
pub mod fulfilment;
pub mod snapshot;

pub use config::{ConfigError, EngineConfig, LineEnding};
pub use fulfilment::{Fulfilment, FulfilmentEngine, FulfilmentOutcome};
pub use snapshot::{CategorySnapshot, Snapshot};
