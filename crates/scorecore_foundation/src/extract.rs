//! Type-checked extraction of argument values.
//!
//! Extraction never coerces: asking for an integer where a string is stored
//! is a type mismatch, not a parse.

use crate::Result;
use crate::args::{ArgValue, Args};
use crate::entity::ObjectId;
use crate::error::Error;
use crate::kind::ArgKind;

/// A Rust type that one argument kind converts into.
///
/// Implementations match on every [`ArgValue`] variant without a wildcard arm.
pub trait FromArg: Sized {
    /// The argument kind this type is extracted from.
    const KIND: ArgKind;

    /// Converts `value`, bound to the argument `name`, into `Self`.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch error if `value` is not of kind [`Self::KIND`].
    fn from_arg(name: &str, value: &ArgValue) -> Result<Self>;
}

fn mismatch<T: FromArg>(name: &str, value: &ArgValue) -> Error {
    Error::type_mismatch(name, T::KIND, value.kind())
}

impl FromArg for i64 {
    const KIND: ArgKind = ArgKind::Int;

    fn from_arg(name: &str, value: &ArgValue) -> Result<Self> {
        match value {
            ArgValue::Int(n) => Ok(*n),
            ArgValue::String(_) | ArgValue::Object(_) | ArgValue::Objects(_) => {
                Err(mismatch::<Self>(name, value))
            }
        }
    }
}

impl FromArg for String {
    const KIND: ArgKind = ArgKind::String;

    fn from_arg(name: &str, value: &ArgValue) -> Result<Self> {
        match value {
            ArgValue::String(s) => Ok(s.to_string()),
            ArgValue::Int(_) | ArgValue::Object(_) | ArgValue::Objects(_) => {
                Err(mismatch::<Self>(name, value))
            }
        }
    }
}

impl FromArg for ObjectId {
    const KIND: ArgKind = ArgKind::Object;

    fn from_arg(name: &str, value: &ArgValue) -> Result<Self> {
        match value {
            ArgValue::Object(id) => Ok(*id),
            ArgValue::Int(_) | ArgValue::String(_) | ArgValue::Objects(_) => {
                Err(mismatch::<Self>(name, value))
            }
        }
    }
}

impl FromArg for Vec<ObjectId> {
    const KIND: ArgKind = ArgKind::Objects;

    fn from_arg(name: &str, value: &ArgValue) -> Result<Self> {
        match value {
            ArgValue::Objects(ids) => Ok(ids.clone()),
            ArgValue::Int(_) | ArgValue::String(_) | ArgValue::Object(_) => {
                Err(mismatch::<Self>(name, value))
            }
        }
    }
}

/// Extracts the integer argument `name`, or `default` if it is absent.
///
/// # Errors
///
/// Returns a type mismatch error if `name` holds another kind.
pub fn extract_int_arg(args: &Args, name: &str, default: i64) -> Result<i64> {
    Ok(args.extract(name)?.unwrap_or(default))
}

/// Extracts the text argument `name`, or `default` if it is absent.
///
/// # Errors
///
/// Returns a type mismatch error if `name` holds another kind.
pub fn extract_string_arg(args: &Args, name: &str, default: impl Into<String>) -> Result<String> {
    Ok(args.extract(name)?.unwrap_or_else(|| default.into()))
}

/// Extracts the single-entity argument `name`, or `None` if it is absent.
///
/// # Errors
///
/// Returns a type mismatch error if `name` holds another kind.
pub fn extract_score_object_arg(args: &Args, name: &str) -> Result<Option<ObjectId>> {
    args.extract(name)
}

/// Extracts the entity-sequence argument `name`, or an empty sequence if it is absent.
///
/// # Errors
///
/// Returns a type mismatch error if `name` holds another kind.
pub fn extract_vector_of_score_objects_arg(args: &Args, name: &str) -> Result<Vec<ObjectId>> {
    Ok(args.extract(name)?.unwrap_or_default())
}

/// Returns a copy of `args` with every key in `keys` removed.
///
/// Subclass constructors call this after reading their own keys so that the
/// remainder can be forwarded to the superclass constructor. Keys that are not
/// present are ignored.
#[must_use]
pub fn reduce_args_by<I>(args: &Args, keys: I) -> Args
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    keys.into_iter()
        .fold(args.clone(), |reduced, key| reduced.without(key.as_ref()))
}
