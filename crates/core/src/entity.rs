//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Identity here is not required to be unique across a collection: stock items
/// may share an id, and consumers that match by id decide which one wins.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
