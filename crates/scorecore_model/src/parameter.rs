//! Parameters: auxiliary data attached to an item.

use scorecore_foundation::{Args, Result, reduce_args_by};

use crate::id::ItemId;
use crate::score_object::{AsScoreObject, ScoreObject};

const VALUE: &str = "value";

/// A value attached to an item, with a back-reference to that item.
///
/// # Arguments
///
/// - `"value"` (int, optional): the parameter value; unset when absent.
/// - everything [`ScoreObject::new`] accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    object: ScoreObject,
    value: Option<i64>,
    item: Option<ItemId>,
}

impl Parameter {
    /// Constructs an unlinked parameter.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch error if `"value"` is not an integer, and
    /// propagates [`ScoreObject::new`] errors for the remaining keys.
    pub fn new(args: Args) -> Result<Self> {
        let value = args
            .extract::<i64>(VALUE)
            .map_err(|e| e.in_frame("Parameter::new"))?;
        let object = ScoreObject::new(reduce_args_by(&args, [VALUE]))
            .map_err(|e| e.in_frame("Parameter::new"))?;
        Ok(Self {
            object,
            value,
            item: None,
        })
    }

    /// Returns the parameter value, if set.
    #[must_use]
    pub fn value(&self) -> Option<i64> {
        self.value
    }

    /// Sets or clears the parameter value.
    pub fn set_value(&mut self, value: Option<i64>) {
        self.value = value;
    }

    /// Returns the item this parameter is linked to, if any.
    #[must_use]
    pub fn item(&self) -> Option<ItemId> {
        self.item
    }

    /// Points this parameter at its owning item.
    ///
    /// Only the link protocol calls this, so that the item's parameter list
    /// and this back-reference change together.
    pub(crate) fn set_item(&mut self, item: ItemId) {
        self.item = Some(item);
    }
}

impl AsScoreObject for Parameter {
    fn score_object(&self) -> &ScoreObject {
        &self.object
    }

    fn score_object_mut(&mut self) -> &mut ScoreObject {
        &mut self.object
    }
}
