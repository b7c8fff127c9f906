//! Containers: items that other items point to as their structural parent.

use scorecore_foundation::{Args, Result};

use crate::item::{AsItem, Item};
use crate::score_object::{AsScoreObject, ScoreObject};

/// An item that groups other items.
///
/// Only its role as a back-reference target is modelled here; which items a
/// container holds, and in what order, is not tracked by this type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Container {
    item: Item,
}

impl Container {
    /// Constructs a container.
    ///
    /// # Errors
    ///
    /// Propagates [`Item::new`] errors.
    pub fn new(args: Args) -> Result<Self> {
        let item = Item::new(args).map_err(|e| e.in_frame("Container::new"))?;
        Ok(Self { item })
    }
}

impl AsScoreObject for Container {
    fn score_object(&self) -> &ScoreObject {
        self.item.score_object()
    }

    fn score_object_mut(&mut self) -> &mut ScoreObject {
        self.item.score_object_mut()
    }
}

impl AsItem for Container {
    fn item(&self) -> &Item {
        &self.item
    }

    fn item_mut(&mut self) -> &mut Item {
        &mut self.item
    }
}
