//! Reducer primitives shared by the collection and map factories.
//!
//! # Architecture
//!
//! ```text
//! (State, &Action) ──→ route ──┬─ not mine ──────→ extension reducer (or state as-is)
//!                              ├─ mine, nested ──→ fresh child collection reducer
//!                              └─ mine, direct ──→ tagged transition
//! ```
//!
//! - **State**: plain value owned by the host store, moved in and out
//! - **Action**: tagged transition plus optional correlation keys
//! - **Reducer**: pure function that transforms state based on actions

mod extension;
mod routing;

pub use extension::Extension;
pub(crate) use routing::{fallback, route_collection, route_map, Route};

use crate::action::Action;

/// Marker trait for state slices managed by a reducer.
///
/// States should be:
/// - Owned values (the reducer consumes the previous state and returns the next)
/// - Comparable (PartialEq for detecting changes)
/// - Defaultable (the state a reducer starts from on its first dispatch)
pub trait ReducerState: Clone + PartialEq + Default + std::fmt::Debug + Send + 'static {}

/// Reducer transforms state based on actions.
///
/// A reducer is bound at construction time to the entity it owns; that
/// binding never changes and is not part of the state.
/// It must be a pure function: (State, Action) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: ReducerState;

    /// Process an action and return the new state.
    ///
    /// Never fails: actions this reducer does not own or recognize go to
    /// its extension reducer, or leave the state untouched.
    fn reduce(&self, state: Self::State, action: &Action) -> Self::State;

    /// Like [`Reducer::reduce`], starting from the default state when the
    /// store has no state for this reducer yet.
    fn reduce_or_default(&self, state: Option<Self::State>, action: &Action) -> Self::State {
        self.reduce(state.unwrap_or_default(), action)
    }
}
