//! Shared test fixtures.

#![allow(dead_code, unused_imports)]

use redux_collections::{Action, CollectionState, Entry, Extension, ItemId, MapState};
use serde_json::json;

pub fn ids(values: &[i64]) -> Vec<ItemId> {
    values.iter().copied().map(ItemId::Int).collect()
}

pub fn collection(values: &[i64]) -> CollectionState {
    CollectionState::with_items(ids(values))
}

/// Collection extension that answers the foreign "TEST" action and leaves
/// everything else alone.
pub fn collection_mixin() -> Extension<CollectionState> {
    Extension::new(|state: CollectionState, action: &Action| match action.tag() {
        "TEST" => CollectionState {
            error: Some(json!("test")),
            ..CollectionState::default()
        },
        _ => state,
    })
}

/// Map extension that answers the foreign "TEST" action with a marker entry.
pub fn map_mixin() -> Extension<MapState> {
    Extension::new(|state: MapState, action: &Action| match action.tag() {
        "TEST" => [(ItemId::from("test"), Entry::default().with_field("test", json!(true)))]
            .into_iter()
            .collect(),
        _ => state,
    })
}

pub fn test_action() -> Action {
    Action::custom("TEST", serde_json::Value::Null)
}

/// Two posts, each with `comments` and `events` child collections.
pub fn posts() -> MapState {
    [
        (
            ItemId::Int(1),
            Entry::default()
                .with_collection("comments", collection(&[1, 2, 3]))
                .with_collection("events", collection(&[1, 2, 3])),
        ),
        (
            ItemId::Int(2),
            Entry::default()
                .with_collection("comments", collection(&[4, 5, 6]))
                .with_collection("events", collection(&[4, 5, 6])),
        ),
    ]
    .into_iter()
    .collect()
}
