//! Minimal host store.
//!
//! Combines any number of collection and map reducers into one root state,
//! feeding every dispatched action to every reducer with its own slice.
//! Dispatch is synchronous and takes `&mut self`, so at most one dispatch
//! is in flight at a time.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::action::Action;
use crate::collection::{CollectionReducer, CollectionState};
use crate::map::{MapReducer, MapState};
use crate::reducer::Reducer;

/// Root state: one slice per hosted reducer, keyed by the reducer's name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RootState {
    pub collections: BTreeMap<String, CollectionState>,
    pub maps: BTreeMap<String, MapState>,
}

#[derive(Debug)]
pub struct Store {
    collections: Vec<CollectionReducer>,
    maps: Vec<MapReducer>,
    state: RootState,
}

impl Store {
    /// Store whose slices all start from their reducer's default state.
    pub fn new(collections: Vec<CollectionReducer>, maps: Vec<MapReducer>) -> Self {
        let state = RootState {
            collections: collections
                .iter()
                .map(|reducer| (reducer.name().to_string(), CollectionState::default()))
                .collect(),
            maps: maps
                .iter()
                .map(|reducer| (reducer.name().to_string(), MapState::default()))
                .collect(),
        };

        Self {
            collections,
            maps,
            state,
        }
    }

    pub fn dispatch(&mut self, action: &Action) {
        tracing::debug!(
            tag = action.tag(),
            collection = ?action.collection,
            map = ?action.map,
            parent_id = ?action.parent_id,
            "dispatch"
        );

        for reducer in &self.collections {
            let slice = self.state.collections.remove(reducer.name());
            let next = reducer.reduce_or_default(slice, action);
            self.state.collections.insert(reducer.name().to_string(), next);
        }

        for reducer in &self.maps {
            let slice = self.state.maps.remove(reducer.name());
            let next = reducer.reduce_or_default(slice, action);
            self.state.maps.insert(reducer.name().to_string(), next);
        }
    }

    pub fn state(&self) -> &RootState {
        &self.state
    }

    pub fn collection(&self, name: &str) -> Option<&CollectionState> {
        self.state.collections.get(name)
    }

    pub fn map(&self, name: &str) -> Option<&MapState> {
        self.state.maps.get(name)
    }

    pub fn into_state(self) -> RootState {
        self.state
    }
}
