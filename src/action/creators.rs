//! Positional action creators.
//!
//! Collection creators address a top-level collection; chain
//! [`Action::nested_in`] to address a collection living inside a map entry.

use super::{Action, ActionKind, ErrorValue, ItemId, Props};
use crate::map::MapState;

impl Action {
    fn for_collection(collection: impl Into<String>, kind: ActionKind) -> Self {
        Self {
            collection: Some(collection.into()),
            ..Self::new(kind)
        }
    }

    fn for_map(map: impl Into<String>, kind: ActionKind) -> Self {
        Self {
            map: Some(map.into()),
            ..Self::new(kind)
        }
    }

    /// Appends items to the collection.
    pub fn collection_append(collection: impl Into<String>, items: Vec<ItemId>) -> Self {
        Self::for_collection(collection, ActionKind::CollectionAppend { items })
    }

    /// Prepends items to the collection.
    pub fn collection_prepend(collection: impl Into<String>, items: Vec<ItemId>) -> Self {
        Self::for_collection(collection, ActionKind::CollectionPrepend { items })
    }

    /// Removes the first occurrence of `id` from the collection.
    pub fn collection_remove(collection: impl Into<String>, id: impl Into<ItemId>) -> Self {
        Self::for_collection(collection, ActionKind::CollectionRemove { id: id.into() })
    }

    /// Replaces the collection state with `items` and nothing else.
    pub fn collection_reset(collection: impl Into<String>, items: Vec<ItemId>) -> Self {
        Self::for_collection(collection, ActionKind::CollectionReset { items })
    }

    pub fn collection_is_appending(collection: impl Into<String>) -> Self {
        Self::for_collection(collection, ActionKind::CollectionIsAppending)
    }

    pub fn collection_is_prepending(collection: impl Into<String>) -> Self {
        Self::for_collection(collection, ActionKind::CollectionIsPrepending)
    }

    pub fn collection_error(collection: impl Into<String>, error: ErrorValue) -> Self {
        Self::for_collection(collection, ActionKind::CollectionError { error })
    }

    pub fn collection_is_complete(collection: impl Into<String>) -> Self {
        Self::for_collection(collection, ActionKind::CollectionIsComplete)
    }

    /// Merges `items` into the map, overwriting matching keys.
    pub fn map_add(map: impl Into<String>, items: MapState) -> Self {
        Self::for_map(map, ActionKind::MapAdd { items })
    }

    pub fn map_remove(map: impl Into<String>, id: impl Into<ItemId>) -> Self {
        Self::for_map(map, ActionKind::MapRemove { id: id.into() })
    }

    /// Merges `props` onto the entry at `id`.
    pub fn map_edit(map: impl Into<String>, id: impl Into<ItemId>, props: Props) -> Self {
        Self::for_map(
            map,
            ActionKind::MapEdit {
                id: id.into(),
                props,
            },
        )
    }

    pub fn map_is_editing(map: impl Into<String>, id: impl Into<ItemId>) -> Self {
        Self::for_map(map, ActionKind::MapIsEditing { id: id.into() })
    }

    pub fn map_is_loading(map: impl Into<String>, id: impl Into<ItemId>) -> Self {
        Self::for_map(map, ActionKind::MapIsLoading { id: id.into() })
    }

    pub fn map_error(map: impl Into<String>, id: impl Into<ItemId>, error: ErrorValue) -> Self {
        Self::for_map(
            map,
            ActionKind::MapError {
                id: id.into(),
                error,
            },
        )
    }

    /// Replaces the whole map with `items`.
    pub fn map_reset(map: impl Into<String>, items: MapState) -> Self {
        Self::for_map(map, ActionKind::MapReset { items })
    }

    /// An action of a type this library does not define.
    pub fn custom(tag: impl Into<String>, payload: serde_json::Value) -> Self {
        Self::new(ActionKind::Custom {
            tag: tag.into(),
            payload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::tags;

    #[test]
    fn collection_creators_address_collection_only() {
        let action = Action::collection_append("posts", vec![ItemId::Int(1)]);
        assert_eq!(action.tag(), tags::COLLECTION_APPEND);
        assert_eq!(action.collection.as_deref(), Some("posts"));
        assert!(action.map.is_none());
        assert!(action.parent_id.is_none());
    }

    #[test]
    fn nested_in_sets_map_and_parent() {
        let action = Action::collection_remove("comments", ItemId::Int(1))
            .nested_in("posts", ItemId::Int(7));
        assert_eq!(action.map.as_deref(), Some("posts"));
        assert_eq!(action.parent_id, Some(ItemId::Int(7)));
        assert_eq!(action.collection.as_deref(), Some("comments"));
    }

    #[test]
    fn map_creators_address_map_only() {
        let action = Action::map_is_loading("posts", "abc");
        assert_eq!(action.tag(), tags::MAP_IS_LOADING);
        assert_eq!(action.map.as_deref(), Some("posts"));
        assert!(action.collection.is_none());
        assert_eq!(
            action.kind,
            ActionKind::MapIsLoading {
                id: ItemId::from("abc")
            }
        );
    }
}
