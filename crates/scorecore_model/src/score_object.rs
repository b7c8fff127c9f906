//! The base of every score entity.

use scorecore_foundation::{Args, Result};

/// Free-form annotations shared by every score entity.
///
/// # Arguments
///
/// - `"info"` (string, optional): first info entry. More entries can be added
///   later with [`ScoreObject::add_info`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreObject {
    info: Vec<String>,
}

impl ScoreObject {
    /// Constructs a score object, consuming `"info"`.
    ///
    /// This is the top of every constructor chain, so any key still in `args`
    /// at this point was not understood by any level.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch error if `"info"` is not a string, and an
    /// invalid argument error naming the first key left unconsumed.
    pub fn new(mut args: Args) -> Result<Self> {
        let mut object = Self::default();
        if let Some(info) = args.take::<String>("info")? {
            object.info.push(info);
        }
        args.ensure_consumed("ScoreObject::new")?;
        Ok(object)
    }

    /// Returns all info entries in insertion order.
    #[must_use]
    pub fn info(&self) -> &[String] {
        &self.info
    }

    /// Appends an info entry. Duplicates are kept.
    pub fn add_info(&mut self, info: impl Into<String>) {
        self.info.push(info.into());
    }

    /// Returns true if some info entry equals `info`.
    #[must_use]
    pub fn has_this_info(&self, info: &str) -> bool {
        self.info.iter().any(|entry| entry == info)
    }
}

/// Access to the [`ScoreObject`] embedded in a score entity.
pub trait AsScoreObject {
    /// Returns the embedded score object.
    fn score_object(&self) -> &ScoreObject;

    /// Returns the embedded score object mutably.
    fn score_object_mut(&mut self) -> &mut ScoreObject;

    /// Returns all info entries in insertion order.
    fn info(&self) -> &[String] {
        self.score_object().info()
    }

    /// Appends an info entry. Duplicates are kept.
    fn add_info(&mut self, info: impl Into<String>) {
        self.score_object_mut().add_info(info);
    }

    /// Returns true if some info entry equals `info`.
    fn has_this_info(&self, info: &str) -> bool {
        self.score_object().has_this_info(info)
    }
}

impl AsScoreObject for ScoreObject {
    fn score_object(&self) -> &ScoreObject {
        self
    }

    fn score_object_mut(&mut self) -> &mut ScoreObject {
        self
    }
}
