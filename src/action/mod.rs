//! Action vocabulary consumed by the collection and map reducers.
//!
//! An [`Action`] is a tagged transition ([`ActionKind`]) plus optional
//! correlation keys (`collection`, `map`, `parent_id`). Reducers route on the
//! presence and values of those keys before ever looking at the tag.

mod creators;
mod id;
pub mod tags;
mod wire;

use serde::{Deserialize, Serialize};

use crate::map::MapState;

pub use id::ItemId;
pub use wire::ActionDecodeError;

/// Error payload attached to a collection or map entry.
///
/// Any JSON value; typically a message string or an error object.
pub type ErrorValue = serde_json::Value;

/// Field overrides merged onto a map entry by `MAP_EDIT`.
pub type Props = serde_json::Map<String, serde_json::Value>;

/// The tagged transition an action requests, with exactly the payload that
/// transition needs.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionKind {
    CollectionAppend { items: Vec<ItemId> },
    CollectionPrepend { items: Vec<ItemId> },
    CollectionRemove { id: ItemId },
    CollectionReset { items: Vec<ItemId> },
    CollectionIsAppending,
    CollectionIsPrepending,
    CollectionError { error: ErrorValue },
    CollectionIsComplete,

    MapAdd { items: MapState },
    MapRemove { id: ItemId },
    MapEdit { id: ItemId, props: Props },
    MapIsEditing { id: ItemId },
    MapIsLoading { id: ItemId },
    MapError { id: ItemId, error: ErrorValue },
    MapReset { items: MapState },

    /// Any action type this library does not define. Only extension
    /// reducers give these meaning.
    Custom {
        tag: String,
        payload: serde_json::Value,
    },
}

impl ActionKind {
    /// The namespaced tag for this transition.
    pub fn tag(&self) -> &str {
        match self {
            ActionKind::CollectionAppend { .. } => tags::COLLECTION_APPEND,
            ActionKind::CollectionPrepend { .. } => tags::COLLECTION_PREPEND,
            ActionKind::CollectionRemove { .. } => tags::COLLECTION_REMOVE,
            ActionKind::CollectionReset { .. } => tags::COLLECTION_RESET,
            ActionKind::CollectionIsAppending => tags::COLLECTION_IS_APPENDING,
            ActionKind::CollectionIsPrepending => tags::COLLECTION_IS_PREPENDING,
            ActionKind::CollectionError { .. } => tags::COLLECTION_ERROR,
            ActionKind::CollectionIsComplete => tags::COLLECTION_IS_COMPLETE,
            ActionKind::MapAdd { .. } => tags::MAP_ADD,
            ActionKind::MapRemove { .. } => tags::MAP_REMOVE,
            ActionKind::MapEdit { .. } => tags::MAP_EDIT,
            ActionKind::MapIsEditing { .. } => tags::MAP_IS_EDITING,
            ActionKind::MapIsLoading { .. } => tags::MAP_IS_LOADING,
            ActionKind::MapError { .. } => tags::MAP_ERROR,
            ActionKind::MapReset { .. } => tags::MAP_RESET,
            ActionKind::Custom { tag, .. } => tag,
        }
    }
}

/// A dispatched action.
///
/// On the wire this is the flat record
/// `{ type, collection?, map?, parentId?, items?, id?, props?, error?, payload? }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "wire::RawAction", into = "wire::RawAction")]
pub struct Action {
    pub kind: ActionKind,
    /// Name of the collection this action addresses.
    pub collection: Option<String>,
    /// Name of the map this action addresses, or the map a nested
    /// collection lives in.
    pub map: Option<String>,
    /// Key of the map entry a nested collection lives under.
    pub parent_id: Option<ItemId>,
}

impl Action {
    /// Bare action with no correlation keys.
    pub fn new(kind: ActionKind) -> Self {
        Self {
            kind,
            collection: None,
            map: None,
            parent_id: None,
        }
    }

    pub fn tag(&self) -> &str {
        self.kind.tag()
    }

    /// Address a collection action at the copy of `collection` nested under
    /// entry `parent_id` of `map`.
    pub fn nested_in(mut self, map: impl Into<String>, parent_id: impl Into<ItemId>) -> Self {
        self.map = Some(map.into());
        self.parent_id = Some(parent_id.into());
        self
    }
}
