//! `warehouse-console`
//!
//! **Responsibility:** line-oriented front end for the warehouse engine.
//!
//! This crate provides:
//! - Command parsing from text input
//! - A shell that drives a `FulfilmentEngine` and renders notifications
//!
//! The console is a **thin shell**: all warehouse behaviour lives in the engine.

pub mod command;
pub mod shell;

pub use command::{Command, CommandError};
pub use shell::{Reply, Shell};
