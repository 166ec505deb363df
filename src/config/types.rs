use serde::{Deserialize, Serialize};

use crate::error::ReducerError;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Top-level ordered collections.
    #[serde(default)]
    pub collections: Vec<CollectionConfig>,
    /// Keyed maps, optionally with nested collections.
    #[serde(default)]
    pub maps: Vec<MapConfig>,
}

/// Declaration of a top-level collection reducer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionConfig {
    /// Collection name actions address (e.g., "feed").
    pub name: String,
    /// Name of a registered collection extension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

/// Declaration of a map reducer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Map name actions address (e.g., "posts").
    pub name: String,
    /// Child collection names (e.g., ["comments", "events"]).
    ///
    /// Kept as a raw value so a wrong shape is reported as a reducer
    /// argument error naming what was found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collections: Option<toml::Value>,
    /// Name of a registered map extension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

impl MapConfig {
    /// Child collection names, if configured.
    ///
    /// # Errors
    /// Returns [`ReducerError::InvalidChildCollections`] if `collections` is
    /// not an array of strings.
    pub fn child_collections(&self) -> Result<Option<Vec<String>>, ReducerError> {
        let Some(value) = &self.collections else {
            return Ok(None);
        };

        let toml::Value::Array(values) = value else {
            return Err(ReducerError::InvalidChildCollections {
                observed: value.type_str().to_string(),
            });
        };

        values
            .iter()
            .map(|value| match value {
                toml::Value::String(name) => Ok(name.clone()),
                other => Err(ReducerError::InvalidChildCollections {
                    observed: format!("array containing {}", with_article(other.type_str())),
                }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}

fn with_article(kind: &str) -> String {
    match kind.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => format!("an {}", kind),
        _ => format!("a {}", kind),
    }
}
