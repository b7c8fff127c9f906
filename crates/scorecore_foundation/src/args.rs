//! The argument bag handed to score entity constructors.
//!
//! Score entity constructors take a single [`Args`] value instead of a long
//! positional parameter list. Each constructor level consumes the keys it
//! understands and forwards the rest to the level above; the base constructor
//! rejects whatever nobody consumed with [`Args::ensure_consumed`].
//!
//! ```
//! use scorecore_foundation::{args, extract_int_arg, extract_string_arg};
//!
//! let args = args! { "info" => "motif", "octave" => 4 };
//! assert_eq!(extract_string_arg(&args, "info", "").unwrap(), "motif");
//! assert_eq!(extract_int_arg(&args, "octave", 0).unwrap(), 4);
//! assert_eq!(extract_int_arg(&args, "duration", 1).unwrap(), 1);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::entity::ObjectId;
use crate::error::Error;
use crate::extract::FromArg;
use crate::kind::ArgKind;
use crate::Result;

/// A single argument value.
///
/// The set of variants is closed. Every extractor matches on all of them, so
/// adding a variant is a compile error until each extractor handles it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum ArgValue {
    /// 64-bit signed integer.
    Int(i64),
    /// Text value.
    String(Arc<str>),
    /// Reference to a single score entity.
    Object(ObjectId),
    /// Ordered sequence of score entity references.
    Objects(Vec<ObjectId>),
}

impl ArgValue {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ArgKind {
        match self {
            Self::Int(_) => ArgKind::Int,
            Self::String(_) => ArgKind::String,
            Self::Object(_) => ArgKind::Object,
            Self::Objects(_) => ArgKind::Objects,
        }
    }

    /// Attempts to extract an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a single entity reference.
    #[must_use]
    pub const fn as_object(&self) -> Option<ObjectId> {
        match self {
            Self::Object(id) => Some(*id),
            _ => None,
        }
    }

    /// Attempts to extract a sequence of entity references.
    #[must_use]
    pub fn as_objects(&self) -> Option<&[ObjectId]> {
        match self {
            Self::Objects(ids) => Some(ids),
            _ => None,
        }
    }
}

impl fmt::Debug for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Object(id) => write!(f, "{id:?}"),
            Self::Objects(ids) => f.debug_list().entries(ids).finish(),
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Object(id) => write!(f, "{id}"),
            Self::Objects(ids) => {
                write!(f, "[")?;
                for (i, id) in ids.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{id}")?;
                }
                write!(f, "]")
            }
        }
    }
}

// Convenience From implementations

impl From<i64> for ArgValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for ArgValue {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<&str> for ArgValue {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for ArgValue {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<Arc<str>> for ArgValue {
    fn from(s: Arc<str>) -> Self {
        Self::String(s)
    }
}

impl From<ObjectId> for ArgValue {
    fn from(id: ObjectId) -> Self {
        Self::Object(id)
    }
}

impl From<Vec<ObjectId>> for ArgValue {
    fn from(ids: Vec<ObjectId>) -> Self {
        Self::Objects(ids)
    }
}

/// Named, optional constructor arguments.
///
/// Keys are unique and kept in sorted order, so "the first leftover key" is
/// well defined. Cloning is O(1); removing keys from a clone shares structure
/// with the original.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Args(im::OrdMap<Arc<str>, ArgValue>);

impl Args {
    /// Creates an empty argument bag.
    #[must_use]
    pub fn new() -> Self {
        Self(im::OrdMap::new())
    }

    /// Returns this bag with `name` bound to `value`.
    #[must_use]
    pub fn with(mut self, name: impl Into<Arc<str>>, value: impl Into<ArgValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Binds `name` to `value`, returning the previous value if any.
    pub fn insert(
        &mut self,
        name: impl Into<Arc<str>>,
        value: impl Into<ArgValue>,
    ) -> Option<ArgValue> {
        self.0.insert(name.into(), value.into())
    }

    /// Gets the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.0.get(name)
    }

    /// Returns true if `name` is bound.
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Consumes the argument `name`, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<ArgValue> {
        self.0.remove(name)
    }

    /// Returns a copy of this bag without `name`.
    #[must_use]
    pub fn without(&self, name: &str) -> Self {
        Self(self.0.without(name))
    }

    /// Returns the number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the bag holds no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the argument names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| &**k)
    }

    /// Returns the arguments in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.0.iter().map(|(k, v)| (&**k, v))
    }

    /// Extracts `name` as `T` without consuming it.
    ///
    /// Returns `Ok(None)` if the argument is absent.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch error if the argument holds another kind.
    pub fn extract<T: FromArg>(&self, name: &str) -> Result<Option<T>> {
        self.get(name)
            .map(|value| T::from_arg(name, value))
            .transpose()
    }

    /// Extracts `name` as `T` and consumes it.
    ///
    /// The argument is only removed when extraction succeeds.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch error if the argument holds another kind.
    pub fn take<T: FromArg>(&mut self, name: &str) -> Result<Option<T>> {
        let value = self.extract(name)?;
        if value.is_some() {
            self.remove(name);
            log::trace!("consumed argument `{name}`");
        }
        Ok(value)
    }

    /// Checks that every argument has been consumed.
    ///
    /// Called at the end of a constructor chain; `constructor` names the
    /// constructor doing the check.
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error naming the first leftover key.
    pub fn ensure_consumed(&self, constructor: &str) -> Result<()> {
        match self.0.get_min() {
            Some((key, _)) => Err(Error::invalid_argument(&**key, constructor)),
            None => Ok(()),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Args
where
    K: Into<Arc<str>>,
    V: Into<ArgValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl fmt::Debug for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Builds an [`Args`] bag from `name => value` pairs.
///
/// A name given twice keeps the last value.
///
/// ```
/// use scorecore_foundation::args;
///
/// let args = args! { "info" => "test", "count" => 42 };
/// assert_eq!(args.len(), 2);
/// assert!(args!{}.is_empty());
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Args::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut args = $crate::Args::new();
        $(
            args.insert($name, $value);
        )+
        args
    }};
}
