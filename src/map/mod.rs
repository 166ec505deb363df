//! Keyed map reducer.
//!
//! A map holds entries keyed by item id. Entries are opaque except for the
//! child collections the reducer is configured with, which are routed to
//! freshly bound collection reducers.
//!
//! - `state.rs` - `MapState` and `Entry`
//! - `reducer.rs` - `MapReducer` and its builder

mod reducer;
mod state;

pub use reducer::{MapReducer, MapReducerBuilder};
pub use state::{Entry, MapState};
