//! Order fulfilment.
//!
//! `process_next_order` consumes exactly one pending order per call, whatever
//! the outcome:
//!
//! ```text
//! dequeue order id (empty queue → None, nothing logged)
//!   ↓
//! in-order walk of the catalog (ascending category name)
//!   ↓  per category: scan items newest first for id == order id
//! first match wins
//!   ├─ quantity > 0 → take one unit     → "deducted 1 from {category}"
//!   └─ otherwise    → leave untouched   → "found in {category} but quantity was 0"
//! no match anywhere                     → "item not found in stock"
//! ```
//!
//! Stock-outs and misses are not retried or re-enqueued. The walk and the
//! mutation happen inside one call; there is no separate "find" operation.

use serde::Serialize;

use warehouse_core::{ItemId, OrderId};
use warehouse_events::{Action, ActionEntry, ActionLog};
use warehouse_inventory::{CategoryCatalog, CategoryId};
use warehouse_orders::OrderQueue;

use crate::config::EngineConfig;
use crate::snapshot::Snapshot;

/// What processing one order did to stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FulfilmentOutcome {
    Deducted { category: String, remaining: i64 },
    OutOfStock { category: String },
    NotFound,
}

impl FulfilmentOutcome {
    fn into_action(self, order_id: OrderId) -> Action {
        match self {
            FulfilmentOutcome::Deducted { category, .. } => {
                Action::OrderDeducted { order_id, category }
            }
            FulfilmentOutcome::OutOfStock { category } => {
                Action::OrderOutOfStock { order_id, category }
            }
            FulfilmentOutcome::NotFound => Action::OrderNotFound { order_id },
        }
    }
}

/// A consumed order and its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fulfilment {
    pub order_id: OrderId,
    #[serde(flatten)]
    pub outcome: FulfilmentOutcome,
}

impl Fulfilment {
    pub fn is_deducted(&self) -> bool {
        matches!(self.outcome, FulfilmentOutcome::Deducted { .. })
    }
}

/// Facade over the warehouse state.
#[derive(Debug, Clone, Default)]
pub struct FulfilmentEngine {
    config: EngineConfig,
    catalog: CategoryCatalog,
    orders: OrderQueue,
    log: ActionLog,
}

impl FulfilmentEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    pub fn orders(&self) -> &OrderQueue {
        &self.orders
    }

    pub fn log(&self) -> &ActionLog {
        &self.log
    }

    /// Add a category. A repeated name adds a shadowed duplicate node.
    pub fn add_category(&mut self, name: impl Into<String>) -> CategoryId {
        let name = name.into();
        let id = self.catalog.add_category(name.clone());
        tracing::debug!(category = %name, depth = self.catalog.depth(), "category added");
        self.log.record(Action::CategoryAdded { category: name });
        id
    }

    /// Add an item to the category found by exact-name search.
    ///
    /// An unknown category is a silent no-op for the caller: nothing is added
    /// and nothing is logged to the action log.
    pub fn add_item(
        &mut self,
        category: &str,
        item_id: ItemId,
        item_name: impl Into<String>,
        quantity: i64,
    ) {
        let Some(node) = self
            .catalog
            .search(category)
            .and_then(|id| self.catalog.get_mut(id))
        else {
            tracing::warn!(category, %item_id, "add_item ignored: category not found");
            return;
        };

        let item_name = item_name.into();
        node.items_mut().add_item(item_id, item_name.clone(), quantity);
        tracing::debug!(category, %item_id, quantity, "item added");

        self.log.record(Action::ItemAdded {
            item_name,
            category: category.to_string(),
        });
    }

    /// Queue an order. Not recorded in the action log.
    pub fn enqueue_order(&mut self, order_id: OrderId) {
        self.orders.enqueue(order_id);
        tracing::debug!(%order_id, pending = self.orders.len(), "order enqueued");
    }

    /// Fulfil the front order. Returns `None` only when no order is pending.
    pub fn process_next_order(&mut self) -> Option<Fulfilment> {
        let Some(order_id) = self.orders.dequeue() else {
            tracing::debug!("process_next_order: queue empty");
            return None;
        };

        let outcome = self.fulfil(order_id.item_id());
        tracing::info!(%order_id, ?outcome, pending = self.orders.len(), "order processed");

        self.log.record(outcome.clone().into_action(order_id));
        Some(Fulfilment { order_id, outcome })
    }

    fn fulfil(&mut self, wanted: ItemId) -> FulfilmentOutcome {
        let mut walk = self.catalog.walk();
        while let Some(id) = walk.advance(&self.catalog) {
            let Some(node) = self.catalog.get_mut(id) else {
                continue;
            };
            let Some(item) = node.items_mut().find_mut(wanted) else {
                continue;
            };

            let taken = item.take_one();
            let category = node.name().to_string();
            return match taken {
                Some(remaining) => FulfilmentOutcome::Deducted {
                    category,
                    remaining,
                },
                None => FulfilmentOutcome::OutOfStock { category },
            };
        }
        FulfilmentOutcome::NotFound
    }

    /// Remove the most recent action log entry. State is not rewound.
    pub fn undo_last_entry(&mut self) -> Option<ActionEntry> {
        let entry = self.log.pop();
        if let Some(entry) = &entry {
            tracing::debug!(
                action = entry.action_type(),
                order_id = ?entry.action.order_id(),
                "action log entry discarded"
            );
        }
        entry
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.catalog, &self.orders, &self.log)
    }

    /// Full text rendering of catalog, queue and log.
    pub fn dump_state(&self) -> String {
        self.snapshot().render(self.config.line_ending)
    }

    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.snapshot())
    }
}
