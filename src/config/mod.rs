//! Declarative reducer configuration.
//!
//! A TOML file names the collections and maps a [`Store`](crate::store::Store)
//! hosts. Extensions are code, so the file refers to them by name and an
//! [`ExtensionRegistry`] resolves those names when the store is built.

mod loader;
mod registry;
mod types;

pub use loader::ConfigError;
pub use registry::ExtensionRegistry;
pub use types::{CollectionConfig, MapConfig, StoreConfig};
