//! Console shell: reads commands, drives the engine, writes notifications.

use std::io::{BufRead, Write};

use anyhow::Context;
use warehouse_engine::FulfilmentEngine;

use crate::command::{Command, HELP};

/// What the shell should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Print(String),
    Quit,
}

#[derive(Debug, Default)]
pub struct Shell {
    engine: FulfilmentEngine,
}

impl Shell {
    pub fn new(engine: FulfilmentEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &FulfilmentEngine {
        &self.engine
    }

    /// Apply one command to the engine.
    pub fn execute(&mut self, command: Command) -> anyhow::Result<Reply> {
        let text = match command {
            Command::AddCategory { name } => {
                self.engine.add_category(name);
                "Category Added!".to_string()
            }
            Command::AddItem {
                category,
                id,
                quantity,
                name,
            } => {
                // Unknown categories are ignored by the engine; the notification
                // is the same either way.
                self.engine.add_item(&category, id, name, quantity);
                "Item Added!".to_string()
            }
            Command::EnqueueOrder { id } => {
                self.engine.enqueue_order(id);
                "Order Added!".to_string()
            }
            Command::ProcessOrder => match self.engine.process_next_order() {
                Some(done) => format!("Processed Order ID: {}", done.order_id),
                None => "No orders in queue!".to_string(),
            },
            Command::Show => self.engine.dump_state(),
            Command::Json => self
                .engine
                .snapshot_json()
                .context("failed to serialize snapshot")?,
            Command::Undo => match self.engine.undo_last_entry() {
                Some(entry) => format!("Removed: {}", entry.description),
                None => "Nothing to undo".to_string(),
            },
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Print(text))
    }

    /// Process input line by line until EOF or `quit`.
    ///
    /// Malformed lines produce an `error:` line and the loop continues.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        for (index, line) in input.lines().enumerate() {
            let line = line.with_context(|| format!("failed to read input line {}", index + 1))?;

            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    tracing::debug!(line = index + 1, error = %err, "rejected input");
                    writeln!(output, "error: {err}").context("failed to write output")?;
                    continue;
                }
            };

            match self.execute(command)? {
                Reply::Print(text) => {
                    let text = text.strip_suffix('\n').unwrap_or(&text);
                    writeln!(output, "{text}").context("failed to write output")?;
                }
                Reply::Quit => break,
            }
        }

        output.flush().context("failed to flush output")?;
        Ok(())
    }
}
