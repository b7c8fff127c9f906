//! Score objects, items, parameters, and the arena that holds them.
//!
//! This crate provides:
//! - [`ScoreObject`] - Annotations shared by every score entity
//! - [`Item`] - Score entities with parameters and a structural parent
//! - [`Parameter`] / [`Container`] - The peers an item links to
//! - [`Score`] - Arena owning every entity, addressed by typed IDs
//! - [`Designer`] - Privileged linking of parameters to items
//!
//! Entity types "inherit" by embedding: an `Item` holds a `ScoreObject`, a
//! `Container` holds an `Item`. The [`AsScoreObject`] and [`AsItem`] traits
//! expose the embedded base, and each constructor forwards its remaining
//! arguments to the one it embeds.
//!
//! ```
//! use scorecore_foundation::args;
//! use scorecore_model::prelude::*;
//!
//! let mut score = Score::new();
//! let bar = score.create_container(args! { "info" => "bar 1" }).unwrap();
//! let (note, params) = score
//!     .designer()
//!     .build_item(args! { "info" => "C4" }, vec![args! { "value" => 60 }])
//!     .unwrap();
//! score.set_container(note, Some(bar)).unwrap();
//!
//! assert_eq!(score.parameter(params[0]).unwrap().item(), Some(note));
//! assert_eq!(score.container_of(note).unwrap(), Some(bar));
//! assert!(score.item(note).unwrap().has_this_info("C4"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod container;
pub mod designer;
pub mod id;
pub mod item;
pub mod parameter;
pub mod score;
pub mod score_object;
pub mod store;

pub use config::ScoreConfig;
pub use container::Container;
pub use designer::Designer;
pub use id::{ContainerId, ItemId, ParameterId};
pub use item::{AsItem, Item};
pub use parameter::Parameter;
pub use score::Score;
pub use score_object::{AsScoreObject, ScoreObject};
pub use store::ObjectStore;

/// Commonly used types and traits.
pub mod prelude {
    pub use crate::{
        AsItem, AsScoreObject, Container, ContainerId, Item, ItemId, Parameter, ParameterId,
        Score, ScoreConfig, ScoreObject,
    };
}
