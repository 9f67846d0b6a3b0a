//! Point-in-time view of catalog, queue and log.
//!
//! Text layout:
//!
//! ```text
//! === Warehouse Categories and Items ===
//!
//! Category: Tools
//! ItemID: 1
//! Name: Hammer
//! Qty: 3
//!
//! === Current Order Queue ===
//! OrderID: 1
//!
//! === Previously done action ===
//! Added item Hammer to Tools
//! Added category: Tools
//! ```
//!
//! Categories ascend by name, items are newest first, orders front to rear,
//! actions most recent first. Every line (the last one included) ends with the
//! configured line ending.

use serde::Serialize;

use warehouse_core::{Entity, OrderId};
use warehouse_events::ActionLog;
use warehouse_inventory::{CategoryCatalog, Item};
use warehouse_orders::OrderQueue;

use crate::config::LineEnding;

const CATALOG_HEADER: &str = "=== Warehouse Categories and Items ===";
const QUEUE_HEADER: &str = "=== Current Order Queue ===";
const LOG_HEADER: &str = "=== Previously done action ===";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySnapshot {
    pub name: String,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub categories: Vec<CategorySnapshot>,
    pub orders: Vec<OrderId>,
    pub actions: Vec<String>,
}

impl Snapshot {
    pub fn capture(catalog: &CategoryCatalog, orders: &OrderQueue, log: &ActionLog) -> Self {
        let categories = catalog
            .iter()
            .map(|node| CategorySnapshot {
                name: node.name().to_string(),
                items: node.items().iter().cloned().collect(),
            })
            .collect();

        Self {
            categories,
            orders: orders.iter().collect(),
            actions: log.iter().map(|entry| entry.description.clone()).collect(),
        }
    }

    pub fn render(&self, line_ending: LineEnding) -> String {
        let mut lines: Vec<String> = vec![CATALOG_HEADER.to_string()];

        for category in &self.categories {
            lines.push(String::new());
            lines.push(format!("Category: {}", category.name));
            for item in &category.items {
                lines.push(format!("ItemID: {}", item.id()));
                lines.push(format!("Name: {}", item.name()));
                lines.push(format!("Qty: {}", item.quantity()));
            }
        }

        lines.push(String::new());
        lines.push(QUEUE_HEADER.to_string());
        lines.extend(self.orders.iter().map(|id| format!("OrderID: {id}")));

        lines.push(String::new());
        lines.push(LOG_HEADER.to_string());
        lines.extend(self.actions.iter().cloned());

        let eol = line_ending.as_str();
        let mut out = lines.join(eol);
        out.push_str(eol);
        out
    }
}

impl core::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.render(LineEnding::Lf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warehouse_core::ItemId;

    fn empty() -> Snapshot {
        Snapshot::capture(&CategoryCatalog::new(), &OrderQueue::new(), &ActionLog::new())
    }

    #[test]
    fn empty_state_renders_headers_only() {
        assert_eq!(
            empty().render(LineEnding::Lf),
            "=== Warehouse Categories and Items ===\n\
             \n\
             === Current Order Queue ===\n\
             \n\
             === Previously done action ===\n"
        );
    }

    #[test]
    fn renders_categories_orders_and_actions() {
        let snapshot = Snapshot {
            categories: vec![
                CategorySnapshot {
                    name: "Paint".into(),
                    items: vec![],
                },
                CategorySnapshot {
                    name: "Tools".into(),
                    items: vec![
                        Item::new(ItemId::new(2), "Saw", 0),
                        Item::new(ItemId::new(1), "Hammer", 3),
                    ],
                },
            ],
            orders: vec![OrderId::new(4), OrderId::new(1)],
            actions: vec!["Added category: Tools".into()],
        };

        let expected = "=== Warehouse Categories and Items ===\n\
                        \n\
                        Category: Paint\n\
                        \n\
                        Category: Tools\n\
                        ItemID: 2\n\
                        Name: Saw\n\
                        Qty: 0\n\
                        ItemID: 1\n\
                        Name: Hammer\n\
                        Qty: 3\n\
                        \n\
                        === Current Order Queue ===\n\
                        OrderID: 4\n\
                        OrderID: 1\n\
                        \n\
                        === Previously done action ===\n\
                        Added category: Tools\n";
        assert_eq!(snapshot.to_string(), expected);
    }

    #[test]
    fn crlf_terminates_every_line() {
        let text = empty().render(LineEnding::CrLf);
        assert!(text.ends_with("===\r\n"));
        assert_eq!(text.matches("\r\n").count(), text.matches('\n').count());
    }
}
