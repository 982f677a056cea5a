//! State holder bound to a navigation location.
//!
//! The store is the only owner of the current [`State`]. Every dispatch runs
//! the reducer, encodes the result and writes it to the location before
//! returning, so the location always mirrors the state. External navigation
//! is picked up by polling [`Store::sync_navigation`].

use crate::navigation::Location;
use crate::state::{fragment, reduce, Action, State, StatePatch};
use tracing::{debug, warn};

/// Owns the query state and keeps a location in sync with it.
#[derive(Debug)]
pub struct Store<L: Location> {
    state: State,
    location: L,
}

impl<L: Location> Store<L> {
    /// Build the initial state from the location, or the empty state when
    /// it has no usable fragment.
    pub fn new(location: L) -> Self {
        let state = initial_state(&location.read());
        Self { state, location }
    }

    /// Current state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// The bound location.
    pub fn location(&self) -> &L {
        &self.location
    }

    /// Mutable access to the bound location, e.g. to drive history.
    pub fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }

    /// Apply an action and write the new state to the location.
    pub fn dispatch(&mut self, action: Action) {
        debug!(action = action.kind(), field = ?action.field(), "dispatch");
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
        self.location.write(&fragment::encode(&self.state));
    }

    /// Poll the location for an external navigation and resynchronize.
    ///
    /// Returns true if a navigation was applied. The write this causes is
    /// not reported back by the location, so syncing never cycles.
    pub fn sync_navigation(&mut self) -> bool {
        let Some(text) = self.location.take_change() else {
            return false;
        };

        let patch = match fragment::decode_patch(&text) {
            Ok(patch) => patch,
            Err(e) => {
                debug!(error = %e, "Navigated to unusable fragment, resetting state");
                StatePatch::from(State::default())
            }
        };
        self.dispatch(Action::Replace(patch));
        true
    }
}

/// Decode the session's starting state, defaulting on failure.
fn initial_state(text: &str) -> State {
    match fragment::decode(text) {
        Ok(state) => state,
        Err(crate::model::FragmentError::Empty) => State::default(),
        Err(e) => {
            warn!(error = %e, "Ignoring malformed fragment");
            State::default()
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
