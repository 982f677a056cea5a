//! Location fragment codec.
//!
//! The fragment is the only persisted form of the state: the JSON document
//! `{"fields": [..], "filter": {..}}`, percent-encoded so it can sit after
//! `#` in a URL. Decoding is forward compatible: unknown top-level keys and
//! unknown keys inside a filter are ignored, and a filter entry with no
//! known key at all is dropped on its own.

use crate::model::{Filter, FragmentError};
use crate::state::{State, StatePatch};
use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;
use tracing::{debug, error};

/// Raw JSON structure for deserializing a fragment.
#[derive(Debug, Deserialize)]
struct RawState {
    #[serde(default)]
    fields: Option<Vec<String>>,
    #[serde(default)]
    filter: Option<IndexMap<String, serde_json::Value>>,
}

/// Encode the state for embedding in a location.
pub fn encode(state: &State) -> String {
    match serde_json::to_string(state) {
        Ok(json) => urlencoding::encode(&json).into_owned(),
        Err(e) => {
            // Only reachable with a broken Serialize impl; the empty fragment
            // decodes to the default state.
            error!(error = %e, "Failed to encode state");
            String::new()
        }
    }
}

/// Decode a fragment into a full state.
///
/// Keys missing from the fragment take their default values.
pub fn decode(text: &str) -> Result<State, FragmentError> {
    decode_patch(text).map(|patch| State::default().merge(patch))
}

/// Decode a fragment into a patch, keeping track of which keys it carries.
///
/// An optional leading `#` is ignored.
pub fn decode_patch(text: &str) -> Result<StatePatch, FragmentError> {
    let text = text.strip_prefix('#').unwrap_or(text);
    if text.trim().is_empty() {
        return Err(FragmentError::Empty);
    }

    let json = urlencoding::decode(text).map_err(|e| FragmentError::Encoding {
        message: e.to_string(),
    })?;

    let raw: RawState =
        serde_json::from_str(&json).map_err(|e| FragmentError::InvalidJson {
            message: e.to_string(),
        })?;

    Ok(StatePatch {
        fields: raw.fields.map(dedup_fields),
        filter: raw.filter.map(decode_filters),
    })
}

/// Keep the first occurrence of each field name.
fn dedup_fields(fields: Vec<String>) -> Vec<String> {
    let unique: IndexSet<String> = fields.into_iter().collect();
    unique.into_iter().collect()
}

/// Decode each filter entry on its own, dropping those we do not understand.
fn decode_filters(raw: IndexMap<String, serde_json::Value>) -> IndexMap<String, Filter> {
    raw.into_iter()
        .filter_map(|(field, value)| {
            if value.is_null() {
                return None;
            }
            match serde_json::from_value::<Filter>(value) {
                Ok(filter) => Some((field, filter)),
                Err(e) => {
                    debug!(field = %field, error = %e, "Dropping unrecognized filter");
                    None
                }
            }
        })
        .collect()
}

// ===== Tests =====

#[cfg(test)]
#[path = "fragment_tests.rs"]
mod tests;
