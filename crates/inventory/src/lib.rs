//! Inventory domain module.
//!
//! Categories of stock items, indexed by name in an unbalanced binary search
//! tree. Pure in-memory data structures (no IO, no logging).

pub mod catalog;
pub mod item;

pub use catalog::{CategoryCatalog, CategoryId, CategoryNode, InOrderWalk, Iter};
pub use item::{Item, ItemCollection};
