//! Construction-time errors.
//!
//! Reducers validate their bindings once, when they are built. Dispatch
//! itself never fails: foreign or malformed actions take the pass-through
//! path instead.

use std::fmt;

use thiserror::Error;

/// The kind of entity a reducer owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Collection,
    Map,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Collection => f.write_str("collection"),
            Entity::Map => f.write_str("map"),
        }
    }
}

/// Invalid arguments passed to a reducer factory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReducerError {
    /// Entity name is empty or blank; such a reducer could never match an action.
    #[error("{entity} name must be a non-empty string")]
    InvalidName { entity: Entity },

    /// Child collection names are not an array of non-empty strings.
    #[error("child collections must be an array of non-empty strings, but got {observed}")]
    InvalidChildCollections { observed: String },

    /// Extension reference does not resolve to a registered function.
    #[error("extension reducer for {entity} '{name}' must be a registered function, but got '{extension}'")]
    InvalidExtension {
        entity: Entity,
        name: String,
        extension: String,
    },
}
