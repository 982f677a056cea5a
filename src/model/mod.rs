//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod field_list;
pub mod filter;
pub mod metadata;
pub mod query;

// Re-export for convenience
pub use error::{AppError, FragmentError};
pub use field_list::{insert_ordered_set, remove_field};
pub use filter::{add_remove, set_keyword_set, toggle_keyword, Filter, InvalidFilter, KeywordSet};
pub use metadata::{FieldMeta, FieldType, FieldsMetadata, MetadataError};
pub use query::QueryRequest;
