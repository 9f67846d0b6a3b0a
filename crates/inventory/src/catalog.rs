//! Category catalog: an unbalanced binary search tree keyed by category name.
//!
//! Nodes live in an arena and refer to their children through [`CategoryId`]
//! handles. Insertion routes strictly-smaller names left and everything else
//! (duplicates included) right, so a repeated name creates a second node that
//! exact-name search never reaches: search stops at the first equal node on
//! the top-down path, which is always the earliest inserted copy.
//!
//! There is no deletion and no rebalancing; depth depends on insertion order.
//! Traversals use a growable explicit stack and are bounded only by memory.

use serde::{Deserialize, Serialize};

use crate::item::ItemCollection;

/// Stable handle to a node of one [`CategoryCatalog`].
///
/// Handles are only meaningful for the catalog that issued them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(usize);

/// One category: its name, its items, and its children in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryNode {
    name: String,
    items: ItemCollection,
    left: Option<CategoryId>,
    right: Option<CategoryId>,
}

impl CategoryNode {
    fn new(name: String) -> Self {
        Self {
            name,
            items: ItemCollection::new(),
            left: None,
            right: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &ItemCollection {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut ItemCollection {
        &mut self.items
    }

    pub fn left(&self) -> Option<CategoryId> {
        self.left
    }

    pub fn right(&self) -> Option<CategoryId> {
        self.right
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCatalog {
    nodes: Vec<CategoryNode>,
    root: Option<CategoryId>,
}

impl CategoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a category, returning the handle of the new node.
    ///
    /// Never fails: an existing name yields a second, shadowed node.
    pub fn add_category(&mut self, name: impl Into<String>) -> CategoryId {
        let name = name.into();
        let id = CategoryId(self.nodes.len());

        let mut slot = match self.root {
            None => {
                self.nodes.push(CategoryNode::new(name));
                self.root = Some(id);
                return id;
            }
            Some(root) => root,
        };

        loop {
            let node = &mut self.nodes[slot.0];
            let next = if name < node.name {
                &mut node.left
            } else {
                &mut node.right
            };
            match *next {
                Some(child) => slot = child,
                None => {
                    *next = Some(id);
                    break;
                }
            }
        }

        self.nodes.push(CategoryNode::new(name));
        id
    }

    /// Exact-name lookup along the top-down search path. O(depth).
    pub fn search(&self, name: &str) -> Option<CategoryId> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.nodes[id.0];
            if name == node.name {
                return Some(id);
            }
            current = if name < node.name.as_str() {
                node.left
            } else {
                node.right
            };
        }
        None
    }

    pub fn get(&self, id: CategoryId) -> Option<&CategoryNode> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: CategoryId) -> Option<&mut CategoryNode> {
        self.nodes.get_mut(id.0)
    }

    pub fn root(&self) -> Option<CategoryId> {
        self.root
    }

    /// Number of nodes, shadowed duplicates included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(CategoryId, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((id, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            let node = &self.nodes[id.0];
            pending.extend(node.left.map(|c| (c, depth + 1)));
            pending.extend(node.right.map(|c| (c, depth + 1)));
        }
        deepest
    }

    /// Start an in-order (ascending name) walk that does not hold a borrow of
    /// the catalog between steps, so nodes can be mutated while walking.
    pub fn walk(&self) -> InOrderWalk {
        InOrderWalk {
            stack: Vec::new(),
            current: self.root,
        }
    }

    /// In-order iterator over all nodes, ascending by name.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            catalog: self,
            walk: self.walk(),
        }
    }
}

impl<'a> IntoIterator for &'a CategoryCatalog {
    type Item = &'a CategoryNode;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cursor for an iterative in-order traversal with an explicit, growable stack.
#[derive(Debug, Clone)]
pub struct InOrderWalk {
    stack: Vec<CategoryId>,
    current: Option<CategoryId>,
}

impl InOrderWalk {
    /// Advance to the next node in ascending name order.
    ///
    /// The catalog must be the one that created this walk and must not have
    /// gained nodes since; mutating items of visited nodes is fine.
    pub fn advance(&mut self, catalog: &CategoryCatalog) -> Option<CategoryId> {
        while let Some(id) = self.current {
            self.stack.push(id);
            self.current = catalog.get(id).and_then(CategoryNode::left);
        }
        let id = self.stack.pop()?;
        self.current = catalog.get(id).and_then(CategoryNode::right);
        Some(id)
    }
}

pub struct Iter<'a> {
    catalog: &'a CategoryCatalog,
    walk: InOrderWalk,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a CategoryNode;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.walk.advance(self.catalog)?;
        self.catalog.get(id)
    }
}
