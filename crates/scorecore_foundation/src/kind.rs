//! Kind descriptors for argument values.

use std::fmt;

/// The closed set of kinds an argument value may hold.
///
/// Mirrors the variants of [`ArgValue`](crate::ArgValue) one to one. Adding a
/// kind means extending this enum, `ArgValue`, and every [`FromArg`](crate::FromArg)
/// implementation.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgKind {
    /// 64-bit signed integer.
    Int,
    /// Text.
    String,
    /// Reference to a single score entity.
    Object,
    /// Ordered sequence of score entity references.
    Objects,
}

impl ArgKind {
    /// All kinds, in declaration order.
    pub const ALL: [ArgKind; 4] = [Self::Int, Self::String, Self::Object, Self::Objects];

    /// Returns the lowercase name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::String => "string",
            Self::Object => "object",
            Self::Objects => "vec<object>",
        }
    }
}

impl fmt::Debug for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
