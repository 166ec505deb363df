//! Named extension reducers referenced from configuration.

use std::collections::HashMap;

use crate::collection::CollectionState;
use crate::map::MapState;
use crate::reducer::Extension;

/// Extensions a configuration may refer to by name.
///
/// Collection and map extensions live in separate namespaces.
#[derive(Debug, Clone, Default)]
pub struct ExtensionRegistry {
    collections: HashMap<String, Extension<CollectionState>>,
    maps: HashMap<String, Extension<MapState>>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(
        mut self,
        name: impl Into<String>,
        extension: Extension<CollectionState>,
    ) -> Self {
        self.collections.insert(name.into(), extension);
        self
    }

    pub fn with_map(mut self, name: impl Into<String>, extension: Extension<MapState>) -> Self {
        self.maps.insert(name.into(), extension);
        self
    }

    pub fn collection(&self, name: &str) -> Option<&Extension<CollectionState>> {
        self.collections.get(name)
    }

    pub fn map(&self, name: &str) -> Option<&Extension<MapState>> {
        self.maps.get(name)
    }
}
