//! Console entry point: reads commands from stdin, answers on stdout.

use std::io;

use anyhow::Context;
use warehouse_console::Shell;
use warehouse_engine::{EngineConfig, FulfilmentEngine};

fn main() -> anyhow::Result<()> {
    warehouse_observability::init();

    let config = EngineConfig::from_env().context("invalid warehouse configuration")?;
    tracing::info!(line_ending = ?config.line_ending, "starting warehouse console");

    let mut shell = Shell::new(FulfilmentEngine::with_config(config));
    shell.run(io::stdin().lock(), io::stdout().lock())
}
