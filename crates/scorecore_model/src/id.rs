//! Typed identifiers for entities held by a [`Score`](crate::Score).
//!
//! All three share one [`ObjectId`] space, so an ID can always be widened back
//! to an `ObjectId` (for example to pass it as an entity argument) and checked
//! against the score when narrowed again.

use std::fmt;

use scorecore_foundation::{ArgValue, ObjectId};

macro_rules! typed_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
        pub struct $name(ObjectId);

        impl $name {
            pub(crate) const fn from_object(id: ObjectId) -> Self {
                Self(id)
            }

            /// Returns the untyped object ID.
            #[must_use]
            pub const fn object(self) -> ObjectId {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({}v{})", stringify!($name), self.0.index, self.0.generation)
            }
        }

        impl From<$name> for ObjectId {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl From<$name> for ArgValue {
            fn from(id: $name) -> Self {
                ArgValue::Object(id.0)
            }
        }
    };
}

typed_id!(
    /// Identifier of an [`Item`](crate::Item), or of a container viewed as an item.
    ItemId
);

typed_id!(
    /// Identifier of a [`Parameter`](crate::Parameter).
    ParameterId
);

typed_id!(
    /// Identifier of a [`Container`](crate::Container).
    ContainerId
);

impl ContainerId {
    /// Views this container as an item.
    #[must_use]
    pub const fn as_item(self) -> ItemId {
        ItemId(self.0)
    }
}
