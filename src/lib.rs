//! photon query-state engine
//!
//! Holds what a log-exploration view shows (an ordered list of visible
//! fields) and what it filters on (a per-field constraint), keeps that state
//! mirrored in a navigation fragment, and turns one-line search expressions
//! into state changes.
//!
//! Pure core: [`model`], [`parser`], [`state::reduce`] and
//! [`state::fragment`]. Impure shell: [`state::Store`] bound to a
//! [`navigation::Location`], plus [`config`] and [`logging`] for the binary.

pub mod config;
pub mod integration;
pub mod logging;
pub mod model;
pub mod navigation;
pub mod parser;
pub mod state;
