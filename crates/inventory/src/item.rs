use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use warehouse_core::{Entity, ItemId};

/// A stock item held by one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    quantity: i64,
}

impl Item {
    /// Quantity is taken as given; negative values are accepted.
    pub fn new(id: ItemId, name: impl Into<String>, quantity: i64) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn is_in_stock(&self) -> bool {
        self.quantity > 0
    }

    /// Take one unit out of stock.
    ///
    /// Returns the remaining quantity, or `None` (leaving the item untouched)
    /// when nothing is in stock.
    pub fn take_one(&mut self) -> Option<i64> {
        if !self.is_in_stock() {
            return None;
        }
        self.quantity -= 1;
        Some(self.quantity)
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }
}

/// Items of one category, newest first.
///
/// No ordering by id or name is kept; lookups scan front to back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemCollection {
    items: VecDeque<Item>,
}

impl ItemCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a new item. O(1).
    pub fn add_item(&mut self, id: ItemId, name: impl Into<String>, quantity: i64) {
        self.items.push_front(Item::new(id, name, quantity));
    }

    /// Newest-first view of the items.
    pub fn iter(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items.iter()
    }

    /// First item (newest first) carrying `id`.
    pub fn find(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Mutable access to the first item (newest first) carrying `id`.
    pub fn find_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a ItemCollection {
    type Item = &'a Item;
    type IntoIter = std::collections::vec_deque::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
