//! Query request handed to the data-fetch layer.

use crate::model::Filter;
use indexmap::IndexMap;
use serde::Serialize;

/// Body of a dataset query: constraints plus the columns to return.
///
/// A direct projection of [`crate::state::State`]; see
/// [`crate::state::State::query_request`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryRequest {
    /// Per-field constraints.
    pub filter: IndexMap<String, Filter>,
    /// Columns to return, in display order.
    pub returning: Vec<String>,
}
