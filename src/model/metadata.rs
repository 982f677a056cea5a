//! Dataset field metadata.
//!
//! Mirrors the `_fields` response of the query backend. The search parser
//! only uses it to decide whether a typed prefix names a known field.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Kind of values a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Discrete string values.
    Keyword,
    /// Free text.
    Phrase,
    /// Numeric values.
    Number,
    /// Points in time.
    Timestamp,
}

/// Metadata for a single field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMeta {
    /// Value kind.
    #[serde(rename = "type")]
    pub ty: FieldType,
    /// Known values, when the backend enumerates them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl FieldMeta {
    /// Metadata for a field with no enumerated values.
    pub fn new(ty: FieldType) -> Self {
        Self { ty, values: None }
    }
}

/// All fields of the active dataset, in backend order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldsMetadata {
    /// Field name to metadata.
    pub fields: IndexMap<String, FieldMeta>,
}

/// Errors loading metadata from disk.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// File could not be read.
    #[error("Failed to read field metadata at {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// File is not a valid `_fields` document.
    #[error("Invalid field metadata in {path}: {source}")]
    Parse {
        /// Path with invalid JSON.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl FieldsMetadata {
    /// Load a `_fields` JSON document.
    pub fn from_path(path: &Path) -> Result<Self, MetadataError> {
        let contents = std::fs::read_to_string(path).map_err(|source| MetadataError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| MetadataError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Whether `name` is a known field.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Metadata for `name`.
    pub fn get(&self, name: &str) -> Option<&FieldMeta> {
        self.fields.get(name)
    }

    /// Known field names starting with `prefix`, in backend order.
    pub fn field_completions<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.fields
            .keys()
            .map(String::as_str)
            .filter(move |name| name.starts_with(prefix))
    }

    /// Enumerated values of `field` starting with `prefix`.
    ///
    /// Empty when the field is unknown or has no enumerated values.
    pub fn value_completions<'a>(
        &'a self,
        field: &str,
        prefix: &'a str,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.fields
            .get(field)
            .and_then(|meta| meta.values.as_deref())
            .unwrap_or_default()
            .iter()
            .map(String::as_str)
            .filter(move |value| value.starts_with(prefix))
    }
}

impl FromIterator<(String, FieldMeta)> for FieldsMetadata {
    fn from_iter<T: IntoIterator<Item = (String, FieldMeta)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
