//! Error types for scorecore.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::entity::ObjectId;
use crate::kind::ArgKind;

/// The main error type for scorecore operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Appends a frame to this error's context, creating the context if needed.
    ///
    /// Constructors that forward their arguments up the entity hierarchy use
    /// this to record the chain of constructors an error passed through.
    #[must_use]
    pub fn in_frame(mut self, frame: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_frame(frame));
        self
    }

    /// Creates an invalid argument error for a key no constructor consumed.
    #[must_use]
    pub fn invalid_argument(key: impl Into<String>, constructor: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument {
            key: key.into(),
            constructor: constructor.into(),
        })
    }

    /// Creates a type mismatch error for the named argument.
    #[must_use]
    pub fn type_mismatch(name: impl Into<String>, expected: ArgKind, actual: ArgKind) -> Self {
        Self::new(ErrorKind::TypeMismatch {
            name: name.into(),
            expected,
            actual,
        })
    }

    /// Creates an entity not found error.
    #[must_use]
    pub fn entity_not_found(id: ObjectId) -> Self {
        Self::new(ErrorKind::EntityNotFound(id))
    }

    /// Creates a stale entity reference error.
    #[must_use]
    pub fn stale_entity(id: ObjectId) -> Self {
        Self::new(ErrorKind::StaleEntity(id))
    }

    /// Creates an error for an ID that resolved to another kind of entity.
    #[must_use]
    pub fn wrong_entity_kind(id: ObjectId, expected: &'static str) -> Self {
        Self::new(ErrorKind::WrongEntityKind { id, expected })
    }

    /// Creates an error for a parameter that is already linked to an item.
    #[must_use]
    pub fn already_linked(parameter: ObjectId, item: ObjectId) -> Self {
        Self::new(ErrorKind::AlreadyLinked { parameter, item })
    }

    /// Creates an error for a parameter listed more than once in one link call.
    #[must_use]
    pub fn duplicate_parameter(parameter: ObjectId) -> Self {
        Self::new(ErrorKind::DuplicateParameter(parameter))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// An argument was left over after every constructor consumed its keys.
    #[error("invalid argument: {constructor} does not accept `{key}`")]
    InvalidArgument {
        /// The first unconsumed key.
        key: String,
        /// The constructor that found the leftover key.
        constructor: String,
    },

    /// An argument holds a different kind than the one requested.
    #[error("type mismatch for argument `{name}`: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The argument name.
        name: String,
        /// The requested kind.
        expected: ArgKind,
        /// The kind actually stored.
        actual: ArgKind,
    },

    /// Entity was not found in the score.
    #[error("entity not found: {0:?}")]
    EntityNotFound(ObjectId),

    /// Entity reference is stale (generation mismatch).
    #[error("stale entity reference: {0:?}")]
    StaleEntity(ObjectId),

    /// Entity exists but is not of the requested kind.
    #[error("entity {id:?} is not a {expected}")]
    WrongEntityKind {
        /// The entity that was resolved.
        id: ObjectId,
        /// The kind of entity the caller asked for.
        expected: &'static str,
    },

    /// Parameter already has an owning item.
    #[error("parameter {parameter:?} is already linked to item {item:?}")]
    AlreadyLinked {
        /// The parameter being linked.
        parameter: ObjectId,
        /// The item it is currently linked to.
        item: ObjectId,
    },

    /// Parameter appears more than once in a single link call.
    #[error("parameter {0:?} is listed more than once")]
    DuplicateParameter(ObjectId),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Constructor or operation frames, innermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for frame in &self.stack {
            writeln!(f, "  in {frame}")?;
        }
        Ok(())
    }
}
