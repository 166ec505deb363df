//! Namespaced action tags.
//!
//! Every tag carries the `@@redux-collections/` prefix so it can never
//! collide with action types defined by the host application.

pub const COLLECTION_APPEND: &str = "@@redux-collections/COLLECTION_APPEND";
pub const COLLECTION_PREPEND: &str = "@@redux-collections/COLLECTION_PREPEND";
pub const COLLECTION_REMOVE: &str = "@@redux-collections/COLLECTION_REMOVE";
pub const COLLECTION_RESET: &str = "@@redux-collections/COLLECTION_RESET";
pub const COLLECTION_IS_APPENDING: &str = "@@redux-collections/COLLECTION_IS_APPENDING";
pub const COLLECTION_IS_PREPENDING: &str = "@@redux-collections/COLLECTION_IS_PREPENDING";
pub const COLLECTION_ERROR: &str = "@@redux-collections/COLLECTION_ERROR";
pub const COLLECTION_IS_COMPLETE: &str = "@@redux-collections/COLLECTION_IS_COMPLETE";

pub const MAP_ADD: &str = "@@redux-collections/MAP_ADD";
pub const MAP_REMOVE: &str = "@@redux-collections/MAP_REMOVE";
pub const MAP_EDIT: &str = "@@redux-collections/MAP_EDIT";
pub const MAP_IS_EDITING: &str = "@@redux-collections/MAP_IS_EDITING";
pub const MAP_IS_LOADING: &str = "@@redux-collections/MAP_IS_LOADING";
pub const MAP_ERROR: &str = "@@redux-collections/MAP_ERROR";
pub const MAP_RESET: &str = "@@redux-collections/MAP_RESET";
