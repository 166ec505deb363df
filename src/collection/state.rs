use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::action::{ErrorValue, ItemId, Props};
use crate::reducer::ReducerState;

/// State of one ordered collection.
///
/// A `false` flag means "not set" and is left out of the serialized form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionState {
    pub items: Vec<ItemId>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub is_appending: bool,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub is_prepending: bool,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub is_complete: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorValue>,
}

fn is_unset(flag: &bool) -> bool {
    !*flag
}

impl CollectionState {
    /// Fresh state holding only `items`; every flag and the error cleared.
    pub fn with_items(items: Vec<ItemId>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }
}

/// Same shape as the serialized form: `items` always present, flags and
/// `error` only when set.
impl From<CollectionState> for Value {
    fn from(state: CollectionState) -> Self {
        let mut fields = Props::new();
        fields.insert(
            "items".to_string(),
            Value::Array(state.items.into_iter().map(Value::from).collect()),
        );
        for (key, flag) in [
            ("isAppending", state.is_appending),
            ("isPrepending", state.is_prepending),
            ("isComplete", state.is_complete),
        ] {
            if flag {
                fields.insert(key.to_string(), Value::Bool(true));
            }
        }
        if let Some(error) = state.error {
            fields.insert("error".to_string(), error);
        }
        Value::Object(fields)
    }
}

impl ReducerState for CollectionState {}
