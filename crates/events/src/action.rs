use serde::{Deserialize, Serialize};

use warehouse_core::OrderId;

/// A completed mutation, as it is described in the action log.
///
/// The `Display` form is the log text shown to operators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    CategoryAdded {
        category: String,
    },
    ItemAdded {
        item_name: String,
        category: String,
    },
    /// One unit was taken from the first matching item.
    OrderDeducted {
        order_id: OrderId,
        category: String,
    },
    /// A matching item was found with nothing in stock.
    OrderOutOfStock {
        order_id: OrderId,
        category: String,
    },
    /// No category holds an item matching the order.
    OrderNotFound {
        order_id: OrderId,
    },
}

impl Action {
    /// Stable action name/type identifier (e.g. "order.deducted").
    pub fn action_type(&self) -> &'static str {
        match self {
            Action::CategoryAdded { .. } => "category.added",
            Action::ItemAdded { .. } => "item.added",
            Action::OrderDeducted { .. } => "order.deducted",
            Action::OrderOutOfStock { .. } => "order.out_of_stock",
            Action::OrderNotFound { .. } => "order.not_found",
        }
    }

    pub fn order_id(&self) -> Option<OrderId> {
        match self {
            Action::OrderDeducted { order_id, .. }
            | Action::OrderOutOfStock { order_id, .. }
            | Action::OrderNotFound { order_id } => Some(*order_id),
            Action::CategoryAdded { .. } | Action::ItemAdded { .. } => None,
        }
    }
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Action::CategoryAdded { category } => write!(f, "Added category: {category}"),
            Action::ItemAdded {
                item_name,
                category,
            } => write!(f, "Added item {item_name} to {category}"),
            Action::OrderDeducted { order_id, category } => {
                write!(f, "Processed order: {order_id} (deducted 1 from {category})")
            }
            Action::OrderOutOfStock { order_id, category } => write!(
                f,
                "Processed order: {order_id} (found in {category} but quantity was 0)"
            ),
            Action::OrderNotFound { order_id } => {
                write!(f, "Processed order: {order_id} (item not found in stock)")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_actions_render_log_text() {
        let id = OrderId::new(12);
        let cases = [
            (
                Action::OrderDeducted {
                    order_id: id,
                    category: "Tools".into(),
                },
                "Processed order: 12 (deducted 1 from Tools)",
            ),
            (
                Action::OrderOutOfStock {
                    order_id: id,
                    category: "Tools".into(),
                },
                "Processed order: 12 (found in Tools but quantity was 0)",
            ),
            (
                Action::OrderNotFound { order_id: id },
                "Processed order: 12 (item not found in stock)",
            ),
        ];

        for (action, text) in cases {
            assert_eq!(action.to_string(), text);
            assert_eq!(action.order_id(), Some(id));
        }
    }

    #[test]
    fn catalog_actions_render_log_text() {
        let added = Action::CategoryAdded {
            category: "Paint".into(),
        };
        assert_eq!(added.to_string(), "Added category: Paint");
        assert_eq!(added.action_type(), "category.added");

        let item = Action::ItemAdded {
            item_name: "Roller".into(),
            category: "Paint".into(),
        };
        assert_eq!(item.to_string(), "Added item Roller to Paint");
        assert!(item.order_id().is_none());
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(Action::OrderNotFound {
            order_id: OrderId::new(5),
        })
        .unwrap();
        assert_eq!(json["type"], "order_not_found");
        assert_eq!(json["order_id"], 5);
    }
}
