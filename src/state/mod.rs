//! Query state machine (pure core plus its location binding).
//!
//! All state transitions are pure functions testable without a navigation
//! environment; [`Store`] is the only place side effects happen.

pub mod action;
pub mod app_state;
pub mod fragment;
pub mod reducer;
pub mod store;

// Re-export for convenience
pub use action::Action;
pub use app_state::{State, StatePatch};
pub use reducer::reduce;
pub use store::Store;
