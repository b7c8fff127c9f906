//! The score arena that owns every entity.
//!
//! Entities refer to each other only by ID, so there are no owning cycles and
//! no dangling pointers: a reference that outlives its target fails to
//! resolve with a stale-entity error.

use std::collections::HashMap;

use scorecore_foundation::{Args, Error, ObjectId, Result};

use crate::config::ScoreConfig;
use crate::container::Container;
use crate::designer::Designer;
use crate::id::{ContainerId, ItemId, ParameterId};
use crate::item::{AsItem, Item};
use crate::parameter::Parameter;
use crate::score_object::{AsScoreObject, ScoreObject};
use crate::store::ObjectStore;

/// Owns the storage of all items, containers, and parameters of a score.
///
/// Entities enter only through the `create_*` methods or the [`Designer`], and
/// parameter lists change only through [`Designer::bilink_parameters`]. Outside
/// this crate there is no way to place an existing item in the score or to
/// overwrite a stored one:
///
/// ```compile_fail
/// use scorecore_model::{Item, Score};
///
/// let mut score = Score::new();
/// score.insert_item(Item::new(Default::default()).unwrap());
/// ```
///
/// ```compile_fail
/// use scorecore_model::{Item, Score};
///
/// let mut score = Score::new();
/// let id = score.create_item(Default::default()).unwrap();
/// *score.item_mut(id).unwrap() = Item::new(Default::default()).unwrap();
/// ```
#[derive(Clone, Debug, Default)]
pub struct Score {
    config: ScoreConfig,
    objects: ObjectStore,
    items: HashMap<ObjectId, Item>,
    containers: HashMap<ObjectId, Container>,
    parameters: HashMap<ObjectId, Parameter>,
}

impl Score {
    /// Creates an empty score with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty score with the given configuration.
    #[must_use]
    pub fn with_config(config: ScoreConfig) -> Self {
        let capacity = config.initial_capacity;
        Self {
            config,
            objects: ObjectStore::with_capacity(capacity),
            items: HashMap::with_capacity(capacity),
            containers: HashMap::new(),
            parameters: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ScoreConfig {
        &self.config
    }

    /// Returns the number of live entities of every kind.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns true if the score holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterates over the IDs of all live entities in index order.
    pub fn ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.objects.iter()
    }

    /// Returns a handle for linking entities into the graph.
    ///
    /// Intended for code that defines new item types, not for general clients.
    pub fn designer(&mut self) -> Designer<'_> {
        Designer::new(self)
    }

    // --- Construction ---

    /// Constructs an item from `args` and adds it.
    ///
    /// Nothing is added if construction fails.
    ///
    /// # Errors
    ///
    /// Propagates [`Item::new`] errors.
    pub fn create_item(&mut self, args: Args) -> Result<ItemId> {
        let item = Item::new(args)?;
        Ok(self.insert_item(item))
    }

    /// Constructs a container from `args` and adds it.
    ///
    /// # Errors
    ///
    /// Propagates [`Container::new`] errors.
    pub fn create_container(&mut self, args: Args) -> Result<ContainerId> {
        let container = Container::new(args)?;
        Ok(self.insert_container(container))
    }

    /// Constructs a parameter from `args` and adds it, unlinked.
    ///
    /// # Errors
    ///
    /// Propagates [`Parameter::new`] errors.
    pub fn create_parameter(&mut self, args: Args) -> Result<ParameterId> {
        let parameter = Parameter::new(args)?;
        Ok(self.insert_parameter(parameter))
    }

    /// Adds a freshly constructed, unlinked item.
    pub(crate) fn insert_item(&mut self, item: Item) -> ItemId {
        let id = self.objects.spawn();
        self.items.insert(id, item);
        log::debug!("created item {id:?}");
        ItemId::from_object(id)
    }

    /// Adds a freshly constructed, unlinked container.
    pub(crate) fn insert_container(&mut self, container: Container) -> ContainerId {
        let id = self.objects.spawn();
        self.containers.insert(id, container);
        log::debug!("created container {id:?}");
        ContainerId::from_object(id)
    }

    /// Adds a freshly constructed, unlinked parameter.
    pub(crate) fn insert_parameter(&mut self, parameter: Parameter) -> ParameterId {
        let id = self.objects.spawn();
        self.parameters.insert(id, parameter);
        log::debug!("created parameter {id:?}");
        ParameterId::from_object(id)
    }

    /// Removes an entity of any kind.
    ///
    /// References to it held by other entities are left in place and become
    /// stale.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is stale or was never allocated.
    pub fn destroy(&mut self, id: impl Into<ObjectId>) -> Result<()> {
        let id = id.into();
        self.objects.destroy(id)?;
        self.items.remove(&id);
        self.containers.remove(&id);
        self.parameters.remove(&id);
        log::debug!("destroyed {id:?}");
        Ok(())
    }

    // --- Lookup ---

    /// Gets the item `id`, which may also be a container viewed as an item.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is stale, unknown, or not an item.
    pub fn item(&self, id: ItemId) -> Result<&Item> {
        let oid = id.object();
        self.objects.validate(oid)?;
        if let Some(item) = self.items.get(&oid) {
            return Ok(item);
        }
        self.containers
            .get(&oid)
            .map(AsItem::item)
            .ok_or_else(|| Error::wrong_entity_kind(oid, "item"))
    }

    /// Gets the item `id` mutably.
    ///
    /// Callers outside the crate change items only through [`Score::object_mut`]
    /// and [`Score::set_container`], so parameter lists change only by linking.
    pub(crate) fn item_mut(&mut self, id: ItemId) -> Result<&mut Item> {
        let oid = id.object();
        self.objects.validate(oid)?;
        if let Some(item) = self.items.get_mut(&oid) {
            return Ok(item);
        }
        self.containers
            .get_mut(&oid)
            .map(AsItem::item_mut)
            .ok_or_else(|| Error::wrong_entity_kind(oid, "item"))
    }

    /// Gets the container `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is stale, unknown, or not a container.
    pub fn container(&self, id: ContainerId) -> Result<&Container> {
        let oid = id.object();
        self.objects.validate(oid)?;
        self.containers
            .get(&oid)
            .ok_or_else(|| Error::wrong_entity_kind(oid, "container"))
    }

    /// Gets the parameter `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is stale, unknown, or not a parameter.
    pub fn parameter(&self, id: ParameterId) -> Result<&Parameter> {
        let oid = id.object();
        self.objects.validate(oid)?;
        self.parameters
            .get(&oid)
            .ok_or_else(|| Error::wrong_entity_kind(oid, "parameter"))
    }

    /// Gets the parameter `id` mutably.
    pub(crate) fn parameter_mut(&mut self, id: ParameterId) -> Result<&mut Parameter> {
        let oid = id.object();
        self.objects.validate(oid)?;
        self.parameters
            .get_mut(&oid)
            .ok_or_else(|| Error::wrong_entity_kind(oid, "parameter"))
    }

    /// Gets the score object base of any entity.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is stale or unknown.
    pub fn object(&self, id: ObjectId) -> Result<&ScoreObject> {
        self.objects.validate(id)?;
        if let Some(item) = self.items.get(&id) {
            Ok(item.score_object())
        } else if let Some(container) = self.containers.get(&id) {
            Ok(container.score_object())
        } else if let Some(parameter) = self.parameters.get(&id) {
            Ok(parameter.score_object())
        } else {
            Err(Error::entity_not_found(id))
        }
    }

    /// Gets the score object base of any entity mutably.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is stale or unknown.
    pub fn object_mut(&mut self, id: ObjectId) -> Result<&mut ScoreObject> {
        self.objects.validate(id)?;
        if let Some(item) = self.items.get_mut(&id) {
            Ok(item.score_object_mut())
        } else if let Some(container) = self.containers.get_mut(&id) {
            Ok(container.score_object_mut())
        } else if let Some(parameter) = self.parameters.get_mut(&id) {
            Ok(parameter.score_object_mut())
        } else {
            Err(Error::entity_not_found(id))
        }
    }

    // --- Narrowing untyped IDs ---

    /// Narrows an entity reference (for example from an entity argument) to an item.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is stale, unknown, or neither an item nor a container.
    pub fn item_id(&self, id: ObjectId) -> Result<ItemId> {
        let id = ItemId::from_object(id);
        self.item(id)?;
        Ok(id)
    }

    /// Narrows an entity reference to a container.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is stale, unknown, or not a container.
    pub fn container_id(&self, id: ObjectId) -> Result<ContainerId> {
        let id = ContainerId::from_object(id);
        self.container(id)?;
        Ok(id)
    }

    /// Narrows an entity reference to a parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is stale, unknown, or not a parameter.
    pub fn parameter_id(&self, id: ObjectId) -> Result<ParameterId> {
        let id = ParameterId::from_object(id);
        self.parameter(id)?;
        Ok(id)
    }

    // --- Structure ---

    /// Sets the structural parent of `item`.
    ///
    /// Both IDs must resolve; beyond that nothing is checked, so cycles and
    /// moving an item between containers are the caller's business.
    ///
    /// # Errors
    ///
    /// Returns an error if `item` or `container` does not resolve.
    pub fn set_container(&mut self, item: ItemId, container: Option<ContainerId>) -> Result<()> {
        if let Some(container) = container {
            self.container(container)?;
        }
        self.item_mut(item)?.set_container(container);
        log::debug!("set container of {item:?} to {container:?}");
        Ok(())
    }

    /// Sets or clears the value of `parameter`, leaving its link alone.
    ///
    /// # Errors
    ///
    /// Returns an error if `parameter` does not resolve.
    pub fn set_parameter_value(
        &mut self,
        parameter: ParameterId,
        value: Option<i64>,
    ) -> Result<()> {
        self.parameter_mut(parameter)?.set_value(value);
        Ok(())
    }

    /// Returns the structural parent of `item`.
    ///
    /// # Errors
    ///
    /// Returns an error if `item` does not resolve.
    pub fn container_of(&self, item: ItemId) -> Result<Option<ContainerId>> {
        Ok(self.item(item)?.container())
    }

    /// Resolves the parameters linked to `item`, in link order.
    ///
    /// # Errors
    ///
    /// Returns an error if `item` or any of its parameters does not resolve.
    pub fn linked_parameters(&self, item: ItemId) -> Result<Vec<&Parameter>> {
        self.item(item)?
            .parameters()
            .iter()
            .map(|&parameter| self.parameter(parameter))
            .collect()
    }
}
