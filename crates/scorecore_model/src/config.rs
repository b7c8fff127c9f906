//! Configuration for a score arena.

/// Configuration for a [`Score`](crate::Score).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreConfig {
    /// Reject linking a parameter that is already linked to an item.
    ///
    /// When false, relinking silently repoints the parameter and leaves the
    /// previous item's parameter list untouched.
    pub strict_links: bool,

    /// Number of entities to reserve room for up front.
    pub initial_capacity: usize,
}

impl ScoreConfig {
    /// Creates a configuration that rejects double links.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            strict_links: true,
            ..Self::default()
        }
    }

    /// Builder method to set strict linking.
    #[must_use]
    pub fn with_strict_links(mut self, strict: bool) -> Self {
        self.strict_links = strict;
        self
    }

    /// Builder method to set the initial capacity.
    #[must_use]
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}
