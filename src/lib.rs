//! Reducer factories for ordered collections and keyed maps.
//!
//! [`CollectionReducer`] owns an ordered list of item ids with status flags;
//! [`MapReducer`] owns a keyed map whose entries may hold nested collections.
//! Both decide for every action whether it is not theirs (hand it to the
//! extension reducer), addressed to a nested collection (map only), or
//! theirs to apply.

pub mod action;
pub mod collection;
pub mod config;
pub mod error;
mod logging;
pub mod map;
pub mod reducer;
pub mod store;

pub use action::{Action, ActionKind, ItemId};
pub use collection::{CollectionReducer, CollectionState};
pub use error::{Entity, ReducerError};
pub use logging::init_tracing;
pub use map::{Entry, MapReducer, MapState};
pub use reducer::{Extension, Reducer};
pub use store::{RootState, Store};
