//! scorecore - foundation of a hierarchical music-score data model
//!
//! This crate re-exports all layers of the scorecore system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: scorecore_model      - ScoreObject, Item, Parameter, Container, Score arena
//! Layer 0: scorecore_foundation - Argument bags, extractors, ObjectId, Error
//! ```

pub use scorecore_foundation as foundation;
pub use scorecore_model as model;
