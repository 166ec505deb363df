//! Reducer for keyed maps with optional nested collections.

use serde::Deserialize;
use serde_json::Value;

use crate::action::{Action, ActionKind, ItemId};
use crate::collection::{CollectionReducer, CollectionState};
use crate::error::{Entity, ReducerError};
use crate::reducer::{fallback, route_map, Extension, Reducer, Route};

use super::state::{MapState, ERROR, IS_EDITING, IS_LOADING};

/// Reducer bound to one map name.
///
/// When child collection names are configured, collection actions that
/// carry this map's name and the key of an existing entry are delegated to
/// a collection reducer bound to that entry.
#[derive(Debug, Clone)]
pub struct MapReducer {
    name: String,
    children: Option<Vec<String>>,
    extension: Option<Extension<MapState>>,
}

/// Builder for [`MapReducer`].
#[derive(Debug, Clone)]
pub struct MapReducerBuilder {
    name: String,
    children: Option<Vec<String>>,
    extension: Option<Extension<MapState>>,
}

impl MapReducerBuilder {
    /// Names of the collections nested inside each entry.
    pub fn child_collections<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Reducer consulted for every action this map does not handle.
    pub fn extension(mut self, extension: Extension<MapState>) -> Self {
        self.extension = Some(extension);
        self
    }

    /// # Errors
    /// - [`ReducerError::InvalidName`] if the name is empty or blank
    /// - [`ReducerError::InvalidChildCollections`] if a child name is empty or blank
    pub fn build(self) -> Result<MapReducer, ReducerError> {
        if self.name.trim().is_empty() {
            return Err(ReducerError::InvalidName {
                entity: Entity::Map,
            });
        }

        if let Some(children) = &self.children {
            if children.iter().any(|child| child.trim().is_empty()) {
                return Err(ReducerError::InvalidChildCollections {
                    observed: "array containing an empty string".to_string(),
                });
            }
        }

        tracing::debug!(
            map = %self.name,
            children = ?self.children,
            extension = self.extension.is_some(),
            "map reducer created"
        );

        Ok(MapReducer {
            name: self.name,
            children: self.children,
            extension: self.extension,
        })
    }
}

impl MapReducer {
    /// Map reducer without child collections or an extension.
    pub fn new(name: impl Into<String>) -> Result<Self, ReducerError> {
        Self::builder(name).build()
    }

    pub fn builder(name: impl Into<String>) -> MapReducerBuilder {
        MapReducerBuilder {
            name: name.into(),
            children: None,
            extension: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn child_collections(&self) -> Option<&[String]> {
        self.children.as_deref()
    }

    /// Rebuild the child collection stored at key `collection` of the entry
    /// at `parent_id` through a freshly bound collection reducer. Other
    /// fields of that entry and other entries are left as they are.
    fn reduce_child(
        &self,
        mut state: MapState,
        collection: &str,
        parent_id: &ItemId,
        action: &Action,
    ) -> MapState {
        tracing::trace!(map = %self.name, collection, %parent_id, "delegating to child collection");

        let child = CollectionReducer::nested(collection, parent_id);
        if let Some(entry) = state.get_mut(parent_id) {
            let current = match entry.field(collection).map(|value| CollectionState::deserialize(value)) {
                Some(Ok(current)) => Some(current),
                Some(Err(error)) => {
                    tracing::warn!(
                        map = %self.name,
                        collection,
                        %parent_id,
                        error = %error,
                        "child collection has an unexpected shape, starting from empty"
                    );
                    None
                }
                None => None,
            };
            let next = child.reduce_or_default(current, action);
            entry.merge([(collection.to_string(), Value::from(next))]);
        }
        state
    }

    fn apply(&self, mut state: MapState, action: &Action) -> MapState {
        match &action.kind {
            ActionKind::MapAdd { items } => {
                state.extend(items.clone());
                state
            }
            ActionKind::MapRemove { id } => {
                state.remove(id);
                state
            }
            ActionKind::MapEdit { id, props } => {
                state.entry_or_default(id).merge(props.clone());
                state
            }
            ActionKind::MapIsEditing { id } => {
                state
                    .entry_or_default(id)
                    .merge([(IS_EDITING.to_string(), Value::Bool(true))]);
                state
            }
            ActionKind::MapIsLoading { id } => {
                state
                    .entry_or_default(id)
                    .merge([(IS_LOADING.to_string(), Value::Bool(true))]);
                state
            }
            ActionKind::MapError { id, error } => {
                state.entry_or_default(id).merge([
                    (ERROR.to_string(), error.clone()),
                    (IS_LOADING.to_string(), Value::Bool(false)),
                ]);
                state
            }
            ActionKind::MapReset { items } => items.clone(),
            _ => fallback(self.extension.as_ref(), state, action),
        }
    }
}

impl Reducer for MapReducer {
    type State = MapState;

    fn reduce(&self, state: Self::State, action: &Action) -> Self::State {
        let route = route_map(&self.name, self.children.as_deref(), action, |id| {
            state.contains_key(id)
        });

        match route {
            Route::NotMine => {
                tracing::trace!(map = %self.name, tag = action.tag(), "pass-through");
                fallback(self.extension.as_ref(), state, action)
            }
            Route::Nested {
                collection,
                parent_id,
            } => self.reduce_child(state, collection, parent_id, action),
            Route::Direct => self.apply(state, action),
        }
    }
}
