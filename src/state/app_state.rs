//! Query state.
//!
//! `State` is the single source of truth for the query being built: which
//! columns are visible and which constraints apply. It is pure data; every
//! change goes through [`crate::state::reduce`].

use crate::model::{Filter, QueryRequest};
use indexmap::IndexMap;
use serde::Serialize;

// ===== State =====

/// Query state. Pure data, no side effects.
///
/// # Invariants
///
/// - `fields` contains no duplicates; order is display and return order.
/// - `filter` has no entry for an unconstrained field.
/// - `filter` may constrain fields that are not in `fields`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct State {
    /// Visible columns, in order.
    pub fields: Vec<String>,
    /// Constraint per field.
    pub filter: IndexMap<String, Filter>,
}

impl State {
    /// Whether `field` is currently displayed.
    pub fn is_visible(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }

    /// Current constraint on `field`, if any.
    pub fn filter_for(&self, field: &str) -> Option<&Filter> {
        self.filter.get(field)
    }

    /// Set or clear the constraint on `field`.
    ///
    /// `None` removes the entry; an existing entry keeps its position.
    pub(crate) fn set_filter(&mut self, field: String, filter: Option<Filter>) {
        match filter {
            Some(filter) => {
                self.filter.insert(field, filter);
            }
            None => {
                self.filter.shift_remove(&field);
            }
        }
    }

    /// Shallow merge: keys present in `patch` replace ours, the rest stay.
    pub fn merge(self, patch: StatePatch) -> Self {
        Self {
            fields: patch.fields.unwrap_or(self.fields),
            filter: patch.filter.unwrap_or(self.filter),
        }
    }

    /// Project the state into the request body for the data-fetch layer.
    pub fn query_request(&self) -> QueryRequest {
        QueryRequest {
            filter: self.filter.clone(),
            returning: self.fields.clone(),
        }
    }
}

// ===== StatePatch =====

/// Partial state used to resynchronize from a location.
///
/// `None` means "keep the current value".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatePatch {
    /// Replacement field list.
    pub fields: Option<Vec<String>>,
    /// Replacement filter map.
    pub filter: Option<IndexMap<String, Filter>>,
}

impl From<State> for StatePatch {
    fn from(state: State) -> Self {
        Self {
            fields: Some(state.fields),
            filter: Some(state.filter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> State {
        let mut state = State {
            fields: vec!["ts".to_string(), "status".to_string()],
            filter: IndexMap::new(),
        };
        state.set_filter("status".to_string(), Filter::keyword_is(["200"]));
        state
    }

    #[test]
    fn default_state_is_empty() {
        let state = State::default();
        assert!(state.fields.is_empty());
        assert!(state.filter.is_empty());
    }

    #[test]
    fn set_filter_none_removes_entry() {
        let mut state = sample();
        state.set_filter("status".to_string(), None);
        assert!(state.filter_for("status").is_none());
        assert!(!state.filter.contains_key("status"));
    }

    #[test]
    fn merge_full_patch_replaces_everything() {
        let state = sample();
        let merged = state.merge(State::default().into());
        assert_eq!(merged, State::default());
    }

    #[test]
    fn merge_partial_patch_retains_unlisted_keys() {
        let state = sample();
        let patch = StatePatch {
            fields: Some(vec!["host".to_string()]),
            filter: None,
        };
        let merged = state.clone().merge(patch);
        assert_eq!(merged.fields, vec!["host".to_string()]);
        assert_eq!(merged.filter, state.filter);
    }

    #[test]
    fn query_request_copies_fields_and_filter() {
        let state = sample();
        let request = state.query_request();
        assert_eq!(request.returning, state.fields);
        assert_eq!(request.filter, state.filter);
    }

    #[test]
    fn query_request_wire_shape() {
        let request = sample().query_request();
        insta::assert_snapshot!(
            serde_json::to_string_pretty(&request).unwrap(),
            @r#"
        {
          "filter": {
            "status": {
              "is": [
                "200"
              ]
            }
          },
          "returning": [
            "ts",
            "status"
          ]
        }
        "#
        );
    }

    #[test]
    fn visibility_follows_fields() {
        let state = sample();
        assert!(state.is_visible("ts"));
        assert!(!state.is_visible("host"));
    }
}
