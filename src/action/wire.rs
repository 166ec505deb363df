//! Flat record form of an action, as it appears in JSON action logs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{tags, Action, ActionKind, ErrorValue, ItemId, Props};
use crate::map::MapState;

/// Errors decoding a flat action record into a typed [`Action`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionDecodeError {
    #[error("action '{tag}' is missing required field '{field}'")]
    MissingField { tag: String, field: &'static str },

    #[error("action '{tag}' expects '{field}' to be {expected}")]
    WrongShape {
        tag: String,
        field: &'static str,
        expected: &'static str,
    },
}

/// `items` is a list of ids for collection actions and an object of entries
/// for map actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawItems {
    List(Vec<ItemId>),
    Map(MapState),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawAction {
    #[serde(rename = "type")]
    tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    collection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    map: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent_id: Option<ItemId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    items: Option<RawItems>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<ItemId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    props: Option<Props>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<ErrorValue>,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    payload: serde_json::Value,
}

impl RawAction {
    fn missing(&self, field: &'static str) -> ActionDecodeError {
        ActionDecodeError::MissingField {
            tag: self.tag.clone(),
            field,
        }
    }

    fn list(&mut self) -> Result<Vec<ItemId>, ActionDecodeError> {
        match self.items.take() {
            Some(RawItems::List(items)) => Ok(items),
            Some(RawItems::Map(_)) => Err(ActionDecodeError::WrongShape {
                tag: self.tag.clone(),
                field: "items",
                expected: "an array of ids",
            }),
            None => Err(self.missing("items")),
        }
    }

    fn entries(&mut self) -> Result<MapState, ActionDecodeError> {
        match self.items.take() {
            Some(RawItems::Map(items)) => Ok(items),
            // An empty JSON array is the only list that reads as "no entries".
            Some(RawItems::List(list)) if list.is_empty() => Ok(MapState::default()),
            Some(RawItems::List(_)) => Err(ActionDecodeError::WrongShape {
                tag: self.tag.clone(),
                field: "items",
                expected: "an object keyed by id",
            }),
            None => Err(self.missing("items")),
        }
    }

    fn id(&mut self) -> Result<ItemId, ActionDecodeError> {
        self.id.take().ok_or_else(|| self.missing("id"))
    }

    fn error(&mut self) -> Result<ErrorValue, ActionDecodeError> {
        self.error.take().ok_or_else(|| self.missing("error"))
    }
}

impl TryFrom<RawAction> for Action {
    type Error = ActionDecodeError;

    fn try_from(mut raw: RawAction) -> Result<Self, Self::Error> {
        let kind = match raw.tag.as_str() {
            tags::COLLECTION_APPEND => ActionKind::CollectionAppend { items: raw.list()? },
            tags::COLLECTION_PREPEND => ActionKind::CollectionPrepend { items: raw.list()? },
            tags::COLLECTION_REMOVE => ActionKind::CollectionRemove { id: raw.id()? },
            tags::COLLECTION_RESET => ActionKind::CollectionReset { items: raw.list()? },
            tags::COLLECTION_IS_APPENDING => ActionKind::CollectionIsAppending,
            tags::COLLECTION_IS_PREPENDING => ActionKind::CollectionIsPrepending,
            tags::COLLECTION_ERROR => ActionKind::CollectionError { error: raw.error()? },
            tags::COLLECTION_IS_COMPLETE => ActionKind::CollectionIsComplete,
            tags::MAP_ADD => ActionKind::MapAdd { items: raw.entries()? },
            tags::MAP_REMOVE => ActionKind::MapRemove { id: raw.id()? },
            tags::MAP_EDIT => ActionKind::MapEdit {
                id: raw.id()?,
                props: raw.props.take().unwrap_or_default(),
            },
            tags::MAP_IS_EDITING => ActionKind::MapIsEditing { id: raw.id()? },
            tags::MAP_IS_LOADING => ActionKind::MapIsLoading { id: raw.id()? },
            tags::MAP_ERROR => ActionKind::MapError {
                id: raw.id()?,
                error: raw.error()?,
            },
            tags::MAP_RESET => ActionKind::MapReset { items: raw.entries()? },
            _ => ActionKind::Custom {
                tag: raw.tag.clone(),
                payload: std::mem::take(&mut raw.payload),
            },
        };

        Ok(Action {
            kind,
            collection: raw.collection,
            map: raw.map,
            parent_id: raw.parent_id,
        })
    }
}

impl From<Action> for RawAction {
    fn from(action: Action) -> Self {
        let mut raw = RawAction {
            tag: action.tag().to_string(),
            collection: action.collection,
            map: action.map,
            parent_id: action.parent_id,
            items: None,
            id: None,
            props: None,
            error: None,
            payload: serde_json::Value::Null,
        };

        match action.kind {
            ActionKind::CollectionAppend { items }
            | ActionKind::CollectionPrepend { items }
            | ActionKind::CollectionReset { items } => raw.items = Some(RawItems::List(items)),
            ActionKind::CollectionRemove { id }
            | ActionKind::MapRemove { id }
            | ActionKind::MapIsEditing { id }
            | ActionKind::MapIsLoading { id } => raw.id = Some(id),
            ActionKind::CollectionError { error } => raw.error = Some(error),
            ActionKind::CollectionIsAppending
            | ActionKind::CollectionIsPrepending
            | ActionKind::CollectionIsComplete => {}
            ActionKind::MapAdd { items } | ActionKind::MapReset { items } => {
                raw.items = Some(RawItems::Map(items))
            }
            ActionKind::MapEdit { id, props } => {
                raw.id = Some(id);
                raw.props = Some(props);
            }
            ActionKind::MapError { id, error } => {
                raw.id = Some(id);
                raw.error = Some(error);
            }
            ActionKind::Custom { payload, .. } => raw.payload = payload,
        }

        raw
    }
}
