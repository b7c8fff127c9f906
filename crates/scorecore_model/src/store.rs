//! Identifier allocation for score entities.
//!
//! Every entity in a score takes its [`ObjectId`] from one `ObjectStore`. Each
//! slot carries a generation: odd while an entity occupies it, even while it
//! is vacant. Destroying an entity bumps the generation, so IDs issued before
//! the destroy no longer validate.

use scorecore_foundation::{Error, ObjectId, Result};

/// Allocates object IDs and detects stale ones.
#[derive(Debug, Clone, Default)]
pub struct ObjectStore {
    /// Current generation of each slot.
    slots: Vec<u32>,
    /// Vacant slots, most recently vacated last.
    vacant: Vec<usize>,
    live: usize,
}

const fn is_occupied(generation: u32) -> bool {
    generation % 2 == 1
}

impl ObjectStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with room for `capacity` objects.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Allocates an ID, reusing the most recently vacated slot if there is one.
    pub fn spawn(&mut self) -> ObjectId {
        self.live += 1;
        let slot = match self.vacant.pop() {
            Some(slot) => {
                self.slots[slot] += 1;
                slot
            }
            None => {
                self.slots.push(1);
                self.slots.len() - 1
            }
        };
        ObjectId::new(slot as u64, self.slots[slot])
    }

    /// Vacates the slot held by `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is stale or was never allocated.
    pub fn destroy(&mut self, id: ObjectId) -> Result<()> {
        let slot = self.occupied_slot(id)?;
        self.slots[slot] += 1;
        self.vacant.push(slot);
        self.live -= 1;
        Ok(())
    }

    /// Returns true if `id` refers to a live object.
    #[must_use]
    pub fn exists(&self, id: ObjectId) -> bool {
        self.occupied_slot(id).is_ok()
    }

    /// Checks that `id` refers to a live object.
    ///
    /// # Errors
    ///
    /// Returns `StaleEntity` if the slot has been vacated or reused since `id`
    /// was issued, and `EntityNotFound` if `id` was never issued.
    pub fn validate(&self, id: ObjectId) -> Result<()> {
        self.occupied_slot(id).map(drop)
    }

    fn occupied_slot(&self, id: ObjectId) -> Result<usize> {
        let slot = usize::try_from(id.index).map_err(|_| Error::entity_not_found(id))?;
        match self.slots.get(slot) {
            Some(&generation) if generation == id.generation && is_occupied(generation) => {
                Ok(slot)
            }
            Some(&generation) if generation > id.generation && is_occupied(id.generation) => {
                Err(Error::stale_entity(id))
            }
            _ => Err(Error::entity_not_found(id)),
        }
    }

    /// Returns the number of live objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns true if no object is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Iterates over live object IDs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|&(_, &generation)| is_occupied(generation))
            .map(|(slot, &generation)| ObjectId::new(slot as u64, generation))
    }
}
