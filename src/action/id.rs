//! Opaque item identifiers.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of an item in a collection or a key in a map.
///
/// Identity comparison is strict: `Int(1)` and `Str("1")` are different
/// items inside a collection. Map keys are coerced instead: a string that
/// is a canonical integer addresses the same entry as the integer, see
/// [`ItemId::from_key`] and [`ItemId::to_map_key`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum ItemId {
    Int(i64),
    Str(String),
}

impl ItemId {
    /// Interpret a JSON object key as an identifier.
    pub fn from_key(key: &str) -> Self {
        match key.parse::<i64>() {
            Ok(n) if n.to_string() == key => ItemId::Int(n),
            _ => ItemId::Str(key.to_string()),
        }
    }

    /// The key this id addresses in a map.
    pub fn to_map_key(&self) -> Self {
        match self {
            ItemId::Int(n) => ItemId::Int(*n),
            ItemId::Str(s) => ItemId::from_key(s),
        }
    }
}

impl From<ItemId> for serde_json::Value {
    fn from(id: ItemId) -> Self {
        match id {
            ItemId::Int(n) => serde_json::Value::from(n),
            ItemId::Str(s) => serde_json::Value::String(s),
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Int(n) => write!(f, "{}", n),
            ItemId::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ItemId {
    fn from(n: i64) -> Self {
        ItemId::Int(n)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::Str(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId::Str(s)
    }
}

struct ItemIdVisitor;

impl<'de> Visitor<'de> for ItemIdVisitor {
    type Value = ItemId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or a string identifier")
    }

    fn visit_i64<E: de::Error>(self, n: i64) -> Result<ItemId, E> {
        Ok(ItemId::Int(n))
    }

    fn visit_u64<E: de::Error>(self, n: u64) -> Result<ItemId, E> {
        i64::try_from(n)
            .map(ItemId::Int)
            .map_err(|_| E::custom(format!("identifier {} is out of range", n)))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<ItemId, E> {
        Ok(ItemId::Str(s.to_string()))
    }

    fn visit_string<E: de::Error>(self, s: String) -> Result<ItemId, E> {
        Ok(ItemId::Str(s))
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ItemIdVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_integer_keys_become_ints() {
        assert_eq!(ItemId::from_key("42"), ItemId::Int(42));
        assert_eq!(ItemId::from_key("-7"), ItemId::Int(-7));
    }

    #[test]
    fn non_canonical_keys_stay_strings() {
        assert_eq!(ItemId::from_key("042"), ItemId::Str("042".to_string()));
        assert_eq!(ItemId::from_key("+1"), ItemId::Str("+1".to_string()));
        assert_eq!(ItemId::from_key("abc"), ItemId::Str("abc".to_string()));
    }

    #[test]
    fn map_keys_coerce_numeric_strings() {
        assert_eq!(ItemId::from("12").to_map_key(), ItemId::Int(12));
        assert_eq!(ItemId::from("x12").to_map_key(), ItemId::from("x12"));
        assert_eq!(ItemId::Int(3).to_map_key(), ItemId::Int(3));
    }

    #[test]
    fn json_numbers_and_strings_are_distinct() {
        let ids: Vec<ItemId> = serde_json::from_str(r#"[1, "1", "post-9"]"#).unwrap();
        assert_eq!(
            ids,
            vec![
                ItemId::Int(1),
                ItemId::Str("1".to_string()),
                ItemId::Str("post-9".to_string())
            ]
        );
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn serializes_untagged() {
        let json = serde_json::to_string(&vec![ItemId::Int(3), ItemId::from("x")]).unwrap();
        assert_eq!(json, r#"[3,"x"]"#);
    }
}
