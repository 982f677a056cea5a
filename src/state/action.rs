//! State-change requests.

use crate::model::Filter;
use crate::state::StatePatch;

/// A single request to change the query state.
///
/// Actions are created by UI or parsing code and consumed once by
/// [`crate::state::reduce`]. Every variant has a transition; adding a variant
/// without one fails to compile.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Shallow-merge a decoded location into the state.
    Replace(StatePatch),
    /// Show `field` at `pos` (default: last), moving it if already shown.
    AddField {
        /// Column to show.
        field: String,
        /// Target slot.
        pos: Option<usize>,
    },
    /// Hide `field`. Its constraint is kept.
    RemoveField {
        /// Column to hide.
        field: String,
    },
    /// Set a full constraint. Non-finite number bounds become open ends.
    Filter {
        /// Constrained field.
        field: String,
        /// New constraint.
        filter: Filter,
    },
    /// Drop any constraint on `field`.
    FilterClear {
        /// Field to unconstrain.
        field: String,
    },
    /// Include/exclude click on a single value.
    FilterKeyword {
        /// Constrained field.
        field: String,
        /// Clicked value.
        value: String,
        /// `true` for include, `false` for exclude.
        include: bool,
    },
    /// Replace the constraint with set membership.
    FilterKeywordSet {
        /// Constrained field.
        field: String,
        /// Member values.
        values: Vec<String>,
        /// `true` for "is one of", `false` for "is none of".
        include: bool,
    },
    /// Require the field to be present or missing.
    FilterPresent {
        /// Constrained field.
        field: String,
        /// Required presence.
        present: bool,
    },
}

impl Action {
    /// Field the action targets; None for [`Action::Replace`].
    pub fn field(&self) -> Option<&str> {
        match self {
            Action::Replace(_) => None,
            Action::AddField { field, .. }
            | Action::RemoveField { field }
            | Action::Filter { field, .. }
            | Action::FilterClear { field }
            | Action::FilterKeyword { field, .. }
            | Action::FilterKeywordSet { field, .. }
            | Action::FilterPresent { field, .. } => Some(field),
        }
    }

    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Replace(_) => "replace",
            Action::AddField { .. } => "addField",
            Action::RemoveField { .. } => "removeField",
            Action::Filter { .. } => "filter",
            Action::FilterClear { .. } => "filterClear",
            Action::FilterKeyword { .. } => "filterKeyword",
            Action::FilterKeywordSet { .. } => "filterKeywordSet",
            Action::FilterPresent { .. } => "filterPresent",
        }
    }
}
