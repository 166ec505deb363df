//! Ordered collection reducer.
//!
//! A collection is a list of item ids plus status flags, owned by a name
//! and optionally bound to the map entry it is nested under.
//!
//! - `state.rs` - `CollectionState` (items, flags, error)
//! - `reducer.rs` - `CollectionReducer` and its builder

mod reducer;
mod state;

pub use reducer::{CollectionReducer, CollectionReducerBuilder};
pub use state::CollectionState;
