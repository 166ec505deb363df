//! Extension reducers ("mixins").

use std::fmt;
use std::sync::Arc;

use crate::action::Action;

use super::{Reducer, ReducerState};

/// Caller-supplied state transformer consulted whenever the owning reducer
/// does not own or does not recognize an action.
///
/// Cheap to clone; clones share the same function.
pub struct Extension<S> {
    inner: Arc<dyn Fn(S, &Action) -> S + Send + Sync>,
}

impl<S: ReducerState> Extension<S> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(S, &Action) -> S + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Use another reducer as the extension.
    pub fn from_reducer<R>(reducer: R) -> Self
    where
        R: Reducer<State = S> + Send + Sync + 'static,
    {
        Self::new(move |state, action| reducer.reduce(state, action))
    }

    pub fn apply(&self, state: S, action: &Action) -> S {
        (self.inner)(state, action)
    }
}

impl<S> Clone for Extension<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S> fmt::Debug for Extension<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extension").finish_non_exhaustive()
    }
}
