//! Linking entities into the score graph.
//!
//! A [`Designer`] is what code defining new item types uses to attach
//! parameters to items. General clients read the resulting links through
//! [`Item::parameters`](crate::Item::parameters) and
//! [`Parameter::item`](crate::Parameter::item) but do not create them.

use std::collections::HashSet;

use scorecore_foundation::{Args, Error, Result};

use crate::container::Container;
use crate::id::{ContainerId, ItemId, ParameterId};
use crate::item::Item;
use crate::parameter::Parameter;
use crate::score::Score;

/// Privileged access to a [`Score`] for linking items and parameters.
///
/// Obtained from [`Score::designer`].
#[derive(Debug)]
pub struct Designer<'a> {
    score: &'a mut Score,
}

impl<'a> Designer<'a> {
    pub(crate) fn new(score: &'a mut Score) -> Self {
        Self { score }
    }

    /// Returns the score being designed.
    #[must_use]
    pub fn score(&self) -> &Score {
        self.score
    }

    /// Links `parameters` to `item` in both directions.
    ///
    /// For each parameter in order, appends it to the item's parameter list and
    /// then points the parameter back at the item. Order and duplicates are
    /// kept as given.
    ///
    /// Linking a parameter that already belongs to an item repoints it without
    /// removing it from the previous item's list, unless the score was built
    /// with [`ScoreConfig::strict_links`](crate::ScoreConfig::strict_links).
    ///
    /// Every ID is checked before anything changes, so on error no link has
    /// been made.
    ///
    /// # Errors
    ///
    /// Returns an error if `item` or any parameter does not resolve, or, in
    /// strict mode, if a parameter is already linked (`AlreadyLinked`) or
    /// listed twice (`DuplicateParameter`).
    pub fn bilink_parameters(&mut self, item: ItemId, parameters: &[ParameterId]) -> Result<()> {
        self.score.item(item)?;
        let strict = self.score.config().strict_links;
        let mut seen = HashSet::new();
        for &parameter in parameters {
            let linked = self.score.parameter(parameter)?.item();
            if !strict {
                continue;
            }
            if let Some(owner) = linked {
                return Err(Error::already_linked(parameter.object(), owner.object()));
            }
            if !seen.insert(parameter) {
                return Err(Error::duplicate_parameter(parameter.object()));
            }
        }

        for &parameter in parameters {
            self.score.item_mut(item)?.push_parameter(parameter);
            let target = self.score.parameter_mut(parameter)?;
            if let Some(previous) = target.item().filter(|&previous| previous != item) {
                log::debug!("relinking {parameter:?} from {previous:?} to {item:?}");
            }
            target.set_item(item);
        }
        log::debug!("linked {} parameter(s) to {item:?}", parameters.len());
        Ok(())
    }

    /// Constructs an item and its parameters, adds them, and links them.
    ///
    /// Every constructor runs before anything is added, so a failing argument
    /// bag leaves the score unchanged.
    ///
    /// # Errors
    ///
    /// Propagates constructor errors.
    pub fn build_item(
        &mut self,
        item_args: Args,
        parameter_args: Vec<Args>,
    ) -> Result<(ItemId, Vec<ParameterId>)> {
        let item = Item::new(item_args)?;
        let parameters = Self::construct_parameters(parameter_args)?;

        let item = self.score.insert_item(item);
        let parameters = self.insert_and_link(item, parameters)?;
        Ok((item, parameters))
    }

    /// Constructs a container and its parameters, adds them, and links them.
    ///
    /// # Errors
    ///
    /// Propagates constructor errors.
    pub fn build_container(
        &mut self,
        container_args: Args,
        parameter_args: Vec<Args>,
    ) -> Result<(ContainerId, Vec<ParameterId>)> {
        let container = Container::new(container_args)?;
        let parameters = Self::construct_parameters(parameter_args)?;

        let container = self.score.insert_container(container);
        let parameters = self.insert_and_link(container.as_item(), parameters)?;
        Ok((container, parameters))
    }

    fn construct_parameters(parameter_args: Vec<Args>) -> Result<Vec<Parameter>> {
        parameter_args.into_iter().map(Parameter::new).collect()
    }

    fn insert_and_link(
        &mut self,
        item: ItemId,
        parameters: Vec<Parameter>,
    ) -> Result<Vec<ParameterId>> {
        let ids: Vec<_> = parameters
            .into_iter()
            .map(|parameter| self.score.insert_parameter(parameter))
            .collect();
        self.bilink_parameters(item, &ids)?;
        Ok(ids)
    }
}
