//! State transition function.
//!
//! `reduce` is pure and total: it owns the previous state and returns the
//! next one. No variant falls through a wildcard arm.

use crate::model::{insert_ordered_set, remove_field, set_keyword_set, toggle_keyword, Filter};
use crate::state::{Action, State};
use tracing::trace;

/// Apply one action to the state.
pub fn reduce(mut state: State, action: Action) -> State {
    trace!(action = action.kind(), field = ?action.field(), "reduce");

    match action {
        Action::Replace(patch) => state.merge(patch),
        Action::AddField { field, pos } => {
            state.fields = insert_ordered_set(&state.fields, &field, pos);
            state
        }
        Action::RemoveField { field } => {
            state.fields = remove_field(&state.fields, &field);
            state
        }
        Action::Filter { field, filter } => {
            state.set_filter(field, Some(filter.normalized()));
            state
        }
        Action::FilterClear { field } => {
            state.set_filter(field, None);
            state
        }
        Action::FilterKeyword {
            field,
            value,
            include,
        } => {
            let current = state.filter.get(&field).cloned();
            let next = toggle_keyword(current, &value, include);
            state.set_filter(field, next);
            state
        }
        Action::FilterKeywordSet {
            field,
            values,
            include,
        } => {
            state.set_filter(field, set_keyword_set(values, include));
            state
        }
        Action::FilterPresent { field, present } => {
            state.set_filter(field, Some(Filter::Present { present }));
            state
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "reducer_tests.rs"]
mod tests;
