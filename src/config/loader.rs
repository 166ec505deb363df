use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::collection::CollectionReducer;
use crate::config::registry::ExtensionRegistry;
use crate::config::types::StoreConfig;
use crate::error::{Entity, ReducerError};
use crate::map::MapReducer;
use crate::store::Store;

/// Errors that can occur when loading configuration or building a store from it.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to parse config: {0}")]
    InvalidToml(#[source] toml::de::Error),

    #[error("Invalid reducer argument: {0}")]
    Reducer(#[from] ReducerError),

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl StoreConfig {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/redux-collections/reducers.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("redux-collections").join("reducers.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `StoreConfig::default()`.
    /// - Otherwise behaves like [`StoreConfig::load_from`].
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(StoreConfig::default());
        }

        Self::load_from(&path)
    }

    /// Loads configuration from `path`, parses it as TOML and validates it.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_toml_str(&content).map_err(|e| match e {
            ConfigError::InvalidToml(source) => ConfigError::ParseError {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parses and validates configuration held in memory.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: StoreConfig = toml::from_str(content).map_err(ConfigError::InvalidToml)?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Collection names are unique
    /// - Map names are unique
    /// - Every map's child collections are an array of strings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(name) = first_duplicate(self.collections.iter().map(|c| c.name.as_str())) {
            return Err(ConfigError::ValidationError {
                message: format!("Collection '{}' is declared more than once", name),
            });
        }

        if let Some(name) = first_duplicate(self.maps.iter().map(|m| m.name.as_str())) {
            return Err(ConfigError::ValidationError {
                message: format!("Map '{}' is declared more than once", name),
            });
        }

        for map in &self.maps {
            map.child_collections()?;
        }

        Ok(())
    }

    /// Builds a store hosting every declared reducer.
    ///
    /// # Errors
    /// Returns [`ConfigError::Reducer`] if a reducer rejects its arguments or
    /// an extension name is not registered.
    pub fn build(&self, registry: &ExtensionRegistry) -> Result<Store, ConfigError> {
        self.validate()?;

        let mut collections = Vec::with_capacity(self.collections.len());
        for config in &self.collections {
            let mut builder = CollectionReducer::builder(config.name.as_str());
            if let Some(extension) = &config.extension {
                let resolved =
                    registry
                        .collection(extension)
                        .ok_or_else(|| ReducerError::InvalidExtension {
                            entity: Entity::Collection,
                            name: config.name.clone(),
                            extension: extension.clone(),
                        })?;
                builder = builder.extension(resolved.clone());
            }
            collections.push(builder.build()?);
        }

        let mut maps = Vec::with_capacity(self.maps.len());
        for config in &self.maps {
            let mut builder = MapReducer::builder(config.name.as_str());
            if let Some(children) = config.child_collections()? {
                builder = builder.child_collections(children);
            }
            if let Some(extension) = &config.extension {
                let resolved = registry
                    .map(extension)
                    .ok_or_else(|| ReducerError::InvalidExtension {
                        entity: Entity::Map,
                        name: config.name.clone(),
                        extension: extension.clone(),
                    })?;
                builder = builder.extension(resolved.clone());
            }
            maps.push(builder.build()?);
        }

        tracing::info!(
            collections = collections.len(),
            maps = maps.len(),
            "store built from config"
        );

        Ok(Store::new(collections, maps))
    }
}

fn first_duplicate<'a>(names: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = HashSet::new();
    names.into_iter().find(|name| !seen.insert(*name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CollectionConfig, MapConfig};

    fn map(name: &str, collections: Option<toml::Value>) -> MapConfig {
        MapConfig {
            name: name.to_string(),
            collections,
            extension: None,
        }
    }

    #[test]
    fn duplicate_map_names_fail_validation() {
        let config = StoreConfig {
            collections: vec![],
            maps: vec![map("posts", None), map("posts", None)],
        };
        match config.validate() {
            Err(ConfigError::ValidationError { message }) => assert!(message.contains("posts")),
            other => panic!("expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn collection_and_map_may_share_a_name() {
        let config = StoreConfig {
            collections: vec![CollectionConfig {
                name: "posts".to_string(),
                extension: None,
            }],
            maps: vec![map("posts", None)],
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn non_array_collections_report_observed_shape() {
        let config = StoreConfig {
            collections: vec![],
            maps: vec![map("posts", Some(toml::Value::Integer(3)))],
        };
        match config.validate() {
            Err(ConfigError::Reducer(ReducerError::InvalidChildCollections { observed })) => {
                assert_eq!(observed, "integer")
            }
            other => panic!("expected InvalidChildCollections, got {:?}", other),
        }
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let config = StoreConfig {
            collections: vec![CollectionConfig {
                name: "feed".to_string(),
                extension: Some("audit".to_string()),
            }],
            maps: vec![],
        };
        match config.build(&ExtensionRegistry::new()) {
            Err(ConfigError::Reducer(ReducerError::InvalidExtension { extension, .. })) => {
                assert_eq!(extension, "audit")
            }
            other => panic!("expected InvalidExtension, got {:?}", other.map(|_| ())),
        }
    }
}
