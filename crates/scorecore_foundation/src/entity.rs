//! Score entity identifiers with generational indices.

use std::fmt;

/// Identifier of a score entity held by a score arena.
///
/// The generation counter increments when an index is reused after the entity
/// was destroyed, so a reference kept past its entity's lifetime is detected
/// as stale instead of silently resolving to a newer entity.
///
/// # Layout
/// - `index`: 64-bit index into entity storage
/// - `generation`: 32-bit generation counter
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ObjectId {
    /// Index into entity storage.
    pub index: u64,
    /// Generation counter for stale reference detection.
    pub generation: u32,
}

impl ObjectId {
    /// Creates a new object ID with the given index and generation.
    #[must_use]
    pub const fn new(index: u64, generation: u32) -> Self {
        Self { index, generation }
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({}v{})", self.index, self.generation)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Object({})", self.index)
    }
}
