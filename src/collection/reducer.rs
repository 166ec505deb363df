//! Reducer for ordered collections.

use crate::action::{Action, ActionKind, ItemId};
use crate::error::{Entity, ReducerError};
use crate::reducer::{fallback, route_collection, Extension, Reducer, Route};

use super::state::CollectionState;

/// Reducer bound to one collection name and, for collections nested in a
/// map, to the key of the entry that holds them.
///
/// APPEND, PREPEND, REMOVE and RESET rebuild the state from `items` alone,
/// dropping every flag and the error. The status actions merge onto the
/// existing state instead; ERROR and IS_COMPLETE keep only `items`.
#[derive(Debug, Clone)]
pub struct CollectionReducer {
    name: String,
    parent_id: Option<ItemId>,
    extension: Option<Extension<CollectionState>>,
}

/// Builder for [`CollectionReducer`].
#[derive(Debug, Clone)]
pub struct CollectionReducerBuilder {
    name: String,
    parent_id: Option<ItemId>,
    extension: Option<Extension<CollectionState>>,
}

impl CollectionReducerBuilder {
    /// Bind the collection to the map entry it lives in.
    pub fn parent_id(mut self, parent_id: impl Into<ItemId>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Reducer consulted for every action this collection does not handle.
    pub fn extension(mut self, extension: Extension<CollectionState>) -> Self {
        self.extension = Some(extension);
        self
    }

    /// # Errors
    /// Returns [`ReducerError::InvalidName`] if the name is empty or blank.
    pub fn build(self) -> Result<CollectionReducer, ReducerError> {
        if self.name.trim().is_empty() {
            return Err(ReducerError::InvalidName {
                entity: Entity::Collection,
            });
        }

        tracing::debug!(
            collection = %self.name,
            parent_id = ?self.parent_id,
            extension = self.extension.is_some(),
            "collection reducer created"
        );

        Ok(CollectionReducer {
            name: self.name,
            parent_id: self.parent_id,
            extension: self.extension,
        })
    }
}

impl CollectionReducer {
    /// Top-level collection reducer without an extension.
    pub fn new(name: impl Into<String>) -> Result<Self, ReducerError> {
        Self::builder(name).build()
    }

    pub fn builder(name: impl Into<String>) -> CollectionReducerBuilder {
        CollectionReducerBuilder {
            name: name.into(),
            parent_id: None,
            extension: None,
        }
    }

    /// Child reducer for a collection nested in a map entry. The name has
    /// already been validated as one of the map's child collections.
    pub(crate) fn nested(name: &str, parent_id: &ItemId) -> Self {
        Self {
            name: name.to_string(),
            parent_id: Some(parent_id.clone()),
            extension: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent_id(&self) -> Option<&ItemId> {
        self.parent_id.as_ref()
    }

    fn apply(&self, state: CollectionState, action: &Action) -> CollectionState {
        match &action.kind {
            ActionKind::CollectionAppend { items } => {
                let mut next = state.items;
                next.extend(items.iter().cloned());
                CollectionState::with_items(next)
            }
            ActionKind::CollectionPrepend { items } => {
                let mut next = items.clone();
                next.extend(state.items);
                CollectionState::with_items(next)
            }
            ActionKind::CollectionRemove { id } => {
                let mut next = state.items;
                if let Some(index) = next.iter().position(|item| item == id) {
                    next.remove(index);
                }
                CollectionState::with_items(next)
            }
            ActionKind::CollectionReset { items } => CollectionState::with_items(items.clone()),
            ActionKind::CollectionIsAppending => CollectionState {
                is_appending: true,
                ..state
            },
            ActionKind::CollectionIsPrepending => CollectionState {
                is_prepending: true,
                ..state
            },
            ActionKind::CollectionError { error } => CollectionState {
                error: Some(error.clone()),
                ..CollectionState::with_items(state.items)
            },
            ActionKind::CollectionIsComplete => CollectionState {
                is_complete: true,
                ..CollectionState::with_items(state.items)
            },
            _ => fallback(self.extension.as_ref(), state, action),
        }
    }
}

impl Reducer for CollectionReducer {
    type State = CollectionState;

    fn reduce(&self, state: Self::State, action: &Action) -> Self::State {
        match route_collection(&self.name, self.parent_id.as_ref(), action) {
            Route::Direct => self.apply(state, action),
            Route::NotMine | Route::Nested { .. } => {
                tracing::trace!(collection = %self.name, tag = action.tag(), "pass-through");
                fallback(self.extension.as_ref(), state, action)
            }
        }
    }
}
