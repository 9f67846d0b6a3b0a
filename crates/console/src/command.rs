//! Text commands accepted by the console.

use thiserror::Error;

use warehouse_core::{DomainError, DomainResult, ItemId, OrderId};

pub const HELP: &str = "\
commands:
  category <name>                       add a category
  item <category> <id> <qty> <name>     add an item to a category
  order <id>                            queue an order
  process                               fulfil the next order
  show                                  print all data
  json                                  print all data as JSON
  undo                                  drop the most recent action log entry
  help                                  show this text
  quit                                  leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddCategory {
        name: String,
    },
    AddItem {
        category: String,
        id: ItemId,
        quantity: i64,
        name: String,
    },
    EnqueueOrder {
        id: OrderId,
    },
    ProcessOrder,
    Show,
    Json,
    Undo,
    Help,
    Quit,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("{command}: missing <{argument}>")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

fn missing(command: &'static str, argument: &'static str) -> CommandError {
    CommandError::MissingArgument { command, argument }
}

/// Split off the first whitespace-delimited word.
fn next_word(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => Some((word, rest)),
        None => Some((input, "")),
    }
}

fn parse_quantity(raw: &str) -> DomainResult<i64> {
    raw.parse::<i64>()
        .map_err(|e| DomainError::validation(format!("quantity: {e}")))
}

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let Some((word, rest)) = next_word(line) else {
            return Ok(None);
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "category" => {
                let name = rest.trim();
                if name.is_empty() {
                    return Err(missing("category", "name"));
                }
                Command::AddCategory {
                    name: name.to_string(),
                }
            }
            "item" => {
                let (category, rest) = next_word(rest).ok_or_else(|| missing("item", "category"))?;
                let (id, rest) = next_word(rest).ok_or_else(|| missing("item", "id"))?;
                let (quantity, rest) = next_word(rest).ok_or_else(|| missing("item", "qty"))?;
                let name = rest.trim();
                if name.is_empty() {
                    return Err(missing("item", "name"));
                }
                Command::AddItem {
                    category: category.to_string(),
                    id: id.parse()?,
                    quantity: parse_quantity(quantity)?,
                    name: name.to_string(),
                }
            }
            "order" => {
                let (id, _) = next_word(rest).ok_or_else(|| missing("order", "id"))?;
                Command::EnqueueOrder { id: id.parse()? }
            }
            "process" => Command::ProcessOrder,
            "show" => Command::Show,
            "json" => Command::Json,
            "undo" => Command::Undo,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn parses_category_with_spaces() {
        let cmd = Command::parse("category  Garden Tools ").unwrap().unwrap();
        assert_eq!(
            cmd,
            Command::AddCategory {
                name: "Garden Tools".into()
            }
        );
    }

    #[test]
    fn parses_item_with_multi_word_name() {
        let cmd = Command::parse("item Tools 1 3 Claw Hammer").unwrap().unwrap();
        assert_eq!(
            cmd,
            Command::AddItem {
                category: "Tools".into(),
                id: ItemId::new(1),
                quantity: 3,
                name: "Claw Hammer".into(),
            }
        );
    }

    #[test]
    fn parses_negative_order_ids() {
        let cmd = Command::parse("ORDER -1").unwrap().unwrap();
        assert_eq!(cmd, Command::EnqueueOrder { id: OrderId::new(-1) });
    }

    #[test]
    fn reports_missing_arguments() {
        assert_eq!(
            Command::parse("item Tools 1").unwrap_err(),
            missing("item", "qty")
        );
        assert_eq!(Command::parse("category").unwrap_err(), missing("category", "name"));
    }

    #[test]
    fn reports_bad_numbers() {
        match Command::parse("order seven").unwrap_err() {
            CommandError::Domain(DomainError::InvalidId(_)) => {}
            other => panic!("Expected InvalidId error, got {other:?}"),
        }
        match Command::parse("item Tools 1 lots Hammer").unwrap_err() {
            CommandError::Domain(DomainError::Validation(_)) => {}
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_commands() {
        assert_eq!(
            Command::parse("dance").unwrap_err(),
            CommandError::Unknown("dance".into())
        );
    }
}
