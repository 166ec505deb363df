use std::collections::BTreeMap;

use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::action::{ErrorValue, ItemId, Props};
use crate::collection::CollectionState;
use crate::reducer::ReducerState;

pub(crate) const IS_EDITING: &str = "isEditing";
pub(crate) const IS_LOADING: &str = "isLoading";
pub(crate) const ERROR: &str = "error";

/// The value stored at one key of a map.
///
/// Any JSON value, opaque to the reducer. Map actions that write status
/// fields (`isEditing`, `isLoading`, `error`) treat a non-object entry as an
/// empty object. A child collection lives at the key named after it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entry(Value);

impl Default for Entry {
    /// An empty object.
    fn default() -> Self {
        Entry(Value::Object(Props::new()))
    }
}

impl From<Value> for Entry {
    fn from(value: Value) -> Self {
        Entry(value)
    }
}

impl From<Entry> for Value {
    fn from(entry: Entry) -> Self {
        entry.0
    }
}

impl Entry {
    pub fn new(value: Value) -> Self {
        Entry(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.merge([(key.into(), value)]);
        self
    }

    pub fn with_collection(self, name: impl Into<String>, state: CollectionState) -> Self {
        self.with_field(name, state.into())
    }

    /// Field `key` of an object entry; `None` for other entries.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Child collection stored at `name`, if present and shaped like one.
    pub fn collection(&self, name: &str) -> Option<CollectionState> {
        self.field(name)
            .and_then(|value| CollectionState::deserialize(value).ok())
    }

    pub fn is_editing(&self) -> bool {
        self.flag(IS_EDITING).unwrap_or(false)
    }

    /// `None` until a loading or error action touched the entry.
    pub fn is_loading(&self) -> Option<bool> {
        self.flag(IS_LOADING)
    }

    pub fn error(&self) -> Option<&ErrorValue> {
        self.field(ERROR)
    }

    /// Shallow-merge `fields` onto the entry. A non-object entry is
    /// replaced by an object first.
    pub(crate) fn merge(&mut self, fields: impl IntoIterator<Item = (String, Value)>) {
        let mut base = match std::mem::take(&mut self.0) {
            Value::Object(base) => base,
            _ => Props::new(),
        };
        base.extend(fields);
        self.0 = Value::Object(base);
    }

    fn flag(&self, key: &str) -> Option<bool> {
        self.field(key).and_then(Value::as_bool)
    }
}

/// State of one keyed map.
///
/// Serialized as a JSON object. Keys go through [`ItemId::to_map_key`], so
/// `"1"` and `1` address the same entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapState {
    entries: BTreeMap<ItemId, Entry>,
}

impl MapState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &ItemId) -> Option<&Entry> {
        self.entries.get(&id.to_map_key())
    }

    pub fn get_mut(&mut self, id: &ItemId) -> Option<&mut Entry> {
        self.entries.get_mut(&id.to_map_key())
    }

    pub fn contains_key(&self, id: &ItemId) -> bool {
        self.entries.contains_key(&id.to_map_key())
    }

    pub fn insert(&mut self, id: impl Into<ItemId>, entry: Entry) -> Option<Entry> {
        self.entries.insert(id.into().to_map_key(), entry)
    }

    pub fn remove(&mut self, id: &ItemId) -> Option<Entry> {
        self.entries.remove(&id.to_map_key())
    }

    /// Entry at `id`, created as an empty object if absent.
    pub(crate) fn entry_or_default(&mut self, id: &ItemId) -> &mut Entry {
        self.entries.entry(id.to_map_key()).or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, &Entry)> {
        self.entries.iter()
    }
}

impl FromIterator<(ItemId, Entry)> for MapState {
    fn from_iter<I: IntoIterator<Item = (ItemId, Entry)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(id, entry)| (id.to_map_key(), entry))
                .collect(),
        }
    }
}

impl Extend<(ItemId, Entry)> for MapState {
    fn extend<I: IntoIterator<Item = (ItemId, Entry)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(id, entry)| (id.to_map_key(), entry)));
    }
}

impl IntoIterator for MapState {
    type Item = (ItemId, Entry);
    type IntoIter = std::collections::btree_map::IntoIter<ItemId, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for MapState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, entry) in &self.entries {
            map.serialize_entry(&id.to_string(), entry)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for MapState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, Entry>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .map(|(key, entry)| (ItemId::from_key(&key), entry))
            .collect())
    }
}

impl ReducerState for MapState {}
