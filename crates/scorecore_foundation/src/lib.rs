//! Named construction arguments, identifiers, and errors for scorecore.
//!
//! This crate provides:
//! - [`Args`] - The argument bag handed to every score entity constructor
//! - [`ArgValue`] - The closed set of value kinds an argument may hold
//! - [`ArgKind`] - Kind descriptors used in type checking and diagnostics
//! - Type-checked extractors ([`extract_int_arg`], [`extract_string_arg`], ...)
//! - [`ObjectId`] - Generational identifiers for score entities
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod args;
pub mod entity;
pub mod error;
pub mod extract;
pub mod kind;

pub use args::{ArgValue, Args};
pub use entity::ObjectId;
pub use error::{Error, ErrorContext, ErrorKind};
pub use extract::{
    FromArg, extract_int_arg, extract_score_object_arg, extract_string_arg,
    extract_vector_of_score_objects_arg, reduce_args_by,
};
pub use kind::ArgKind;

/// Result type alias using the scorecore error type.
pub type Result<T> = std::result::Result<T, Error>;
