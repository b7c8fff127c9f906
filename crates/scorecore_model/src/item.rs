//! Items: score objects with attached parameters and a structural parent.

use scorecore_foundation::{Args, Result};

use crate::id::{ContainerId, ParameterId};
use crate::score_object::{AsScoreObject, ScoreObject};

/// A score entity that carries parameters and may sit inside a container.
///
/// The item holds the parameter relation but not the parameters themselves;
/// parameter storage belongs to the [`Score`](crate::Score). Parameters are
/// attached through [`Designer::bilink_parameters`](crate::Designer::bilink_parameters),
/// which also points each parameter back at this item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    object: ScoreObject,
    parameters: Vec<ParameterId>,
    container: Option<ContainerId>,
}

impl Item {
    /// Constructs an item.
    ///
    /// Items take no arguments of their own, so `args` goes to
    /// [`ScoreObject::new`] unchanged. Types built on `Item` that read extra
    /// keys must remove them (see
    /// [`reduce_args_by`](scorecore_foundation::reduce_args_by)) before
    /// calling this.
    ///
    /// # Errors
    ///
    /// Propagates [`ScoreObject::new`] errors.
    pub fn new(args: Args) -> Result<Self> {
        let object = ScoreObject::new(args).map_err(|e| e.in_frame("Item::new"))?;
        Ok(Self {
            object,
            parameters: Vec::new(),
            container: None,
        })
    }

    /// Returns the linked parameters in link order.
    #[must_use]
    pub fn parameters(&self) -> &[ParameterId] {
        &self.parameters
    }

    /// Returns the structural parent, if any.
    #[must_use]
    pub fn container(&self) -> Option<ContainerId> {
        self.container
    }

    /// Sets the structural parent.
    ///
    /// No checks are made here; keeping the container's own view consistent
    /// is up to whoever builds the container.
    pub fn set_container(&mut self, container: Option<ContainerId>) {
        self.container = container;
    }

    pub(crate) fn push_parameter(&mut self, parameter: ParameterId) {
        self.parameters.push(parameter);
    }
}

impl AsScoreObject for Item {
    fn score_object(&self) -> &ScoreObject {
        &self.object
    }

    fn score_object_mut(&mut self) -> &mut ScoreObject {
        &mut self.object
    }
}

/// Access to the [`Item`] embedded in a score entity.
pub trait AsItem: AsScoreObject {
    /// Returns the embedded item.
    fn item(&self) -> &Item;

    /// Returns the embedded item mutably.
    fn item_mut(&mut self) -> &mut Item;

    /// Returns the linked parameters in link order.
    fn parameters(&self) -> &[ParameterId] {
        self.item().parameters()
    }

    /// Returns the structural parent, if any.
    fn container(&self) -> Option<ContainerId> {
        self.item().container()
    }

    /// Sets the structural parent.
    fn set_container(&mut self, container: Option<ContainerId>) {
        self.item_mut().set_container(container);
    }
}

impl AsItem for Item {
    fn item(&self) -> &Item {
        self
    }

    fn item_mut(&mut self) -> &mut Item {
        self
    }
}
