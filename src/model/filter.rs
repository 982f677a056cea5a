//! Filter algebra.
//!
//! `Filter` is a closed sum type: a field carries at most one constraint
//! shape at a time. Keyword sets are wrapped in [`KeywordSet`], whose
//! constructors refuse to build an empty set, so "is nothing" and
//! "not nothing" cannot be represented.
//!
//! All functions here are pure and total.

use chrono::{DateTime, Utc};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

// ===== KeywordSet =====

/// Non-empty, insertion-ordered set of keyword values.
///
/// Smart constructors return `None` for empty input; removing the last value
/// consumes the set and returns `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet(IndexSet<String>);

impl KeywordSet {
    /// Build a set from values, dropping duplicates.
    /// Returns None if no values are given.
    pub fn new<I, S>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: IndexSet<String> = values.into_iter().map(Into::into).collect();
        if set.is_empty() {
            None
        } else {
            Some(Self(set))
        }
    }

    /// A set holding exactly one value.
    pub fn single(value: impl Into<String>) -> Self {
        let mut set = IndexSet::with_capacity(1);
        set.insert(value.into());
        Self(set)
    }

    /// Whether `value` is a member.
    pub fn contains(&self, value: &str) -> bool {
        self.0.contains(value)
    }

    /// Number of values. Always at least one.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; present for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Values in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Add or remove `value`, collapsing to `None` when the set empties.
    pub fn add_remove(self, value: &str, include: bool) -> Option<Self> {
        let set = add_remove(&self.0, value, include);
        if set.is_empty() {
            None
        } else {
            Some(Self(set))
        }
    }
}

impl<'a> IntoIterator for &'a KeywordSet {
    type Item = &'a String;
    type IntoIter = indexmap::set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ===== Filter =====

/// One logical constraint on one field.
///
/// Absence of a constraint is modelled as `Option<Filter>::None` by callers,
/// never as an empty variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "RawFilter", try_from = "RawFilterKeys")]
pub enum Filter {
    /// Field must (or must not) have a value.
    Present {
        /// `true` requires a value, `false` requires none.
        present: bool,
    },
    /// Field value must be one of the set.
    KeywordIs(KeywordSet),
    /// Field value must not be any of the set.
    KeywordNot(KeywordSet),
    /// Numeric bound; either end may be open. Build it with
    /// [`Filter::number_range`] to keep the ends finite.
    NumberRange {
        /// Inclusive lower bound.
        min: Option<f64>,
        /// Inclusive upper bound.
        max: Option<f64>,
    },
    /// Absolute time window. Both bounds are required together.
    TimeRange {
        /// Start of the window.
        after: DateTime<Utc>,
        /// End of the window.
        before: DateTime<Utc>,
    },
    /// Relative window: the last `since` seconds.
    TimeSince {
        /// Window length in seconds.
        since: u64,
    },
}

impl Filter {
    /// `KeywordIs` over `values`, or None when `values` is empty.
    pub fn keyword_is<I, S>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        KeywordSet::new(values).map(Filter::KeywordIs)
    }

    /// `KeywordNot` over `values`, or None when `values` is empty.
    pub fn keyword_not<I, S>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        KeywordSet::new(values).map(Filter::KeywordNot)
    }

    /// Numeric bound with non-finite ends opened.
    ///
    /// JSON has no infinities or NaN, so such a bound could not survive the
    /// fragment codec.
    pub fn number_range(min: Option<f64>, max: Option<f64>) -> Self {
        let finite = |bound: Option<f64>| bound.filter(|v| v.is_finite());
        Filter::NumberRange {
            min: finite(min),
            max: finite(max),
        }
    }

    /// The same constraint in the form it takes after a codec round trip.
    pub fn normalized(self) -> Self {
        match self {
            Filter::NumberRange { min, max } => Filter::number_range(min, max),
            other => other,
        }
    }
}

// ===== Algebra =====

/// Add (`include`) or remove (`!include`) `value`, preserving the order of
/// the remaining elements. Returns a new set.
pub fn add_remove(values: &IndexSet<String>, value: &str, include: bool) -> IndexSet<String> {
    let mut out = values.clone();
    if include {
        if !out.contains(value) {
            out.insert(value.to_string());
        }
    } else {
        out.shift_remove(value);
    }
    out
}

/// Apply an include/exclude click for `value` to a field's current filter.
///
/// - An `is` filter absorbs includes, and an exclude of a member removes it.
/// - A `not` filter absorbs excludes, and an include of a member removes it.
/// - Anything else starts a fresh filter in the clicked direction.
///
/// Emptied sets come back as `None`.
pub fn toggle_keyword(filter: Option<Filter>, value: &str, include: bool) -> Option<Filter> {
    match filter {
        Some(Filter::KeywordIs(set)) if include || set.contains(value) => {
            set.add_remove(value, include).map(Filter::KeywordIs)
        }
        Some(Filter::KeywordNot(set)) if !include || set.contains(value) => {
            set.add_remove(value, !include).map(Filter::KeywordNot)
        }
        _ if include => Some(Filter::KeywordIs(KeywordSet::single(value))),
        _ => Some(Filter::KeywordNot(KeywordSet::single(value))),
    }
}

/// Replace a field's filter outright with a keyword membership constraint.
pub fn set_keyword_set<I, S>(values: I, include: bool) -> Option<Filter>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    if include {
        Filter::keyword_is(values)
    } else {
        Filter::keyword_not(values)
    }
}

// ===== Wire format =====

/// Wire shape written for the fragment and the query request.
///
/// Serialization only. Each variant writes exactly its own keys.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum RawFilter {
    Present {
        present: bool,
    },
    KeywordIs {
        is: Vec<String>,
    },
    KeywordNot {
        not: Vec<String>,
    },
    TimeRange {
        after: DateTime<Utc>,
        before: DateTime<Utc>,
    },
    TimeSince {
        since: u64,
    },
    NumberRange {
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
}

/// Every key any filter shape reads. Keys from newer shapes land in `extra`.
///
/// The shape is chosen by the first known key present, in the order
/// `present`, `is`, `not`, `after`/`before`, `since`, `min`/`max`.
#[derive(Debug, Deserialize)]
struct RawFilterKeys {
    present: Option<bool>,
    is: Option<Vec<String>>,
    not: Option<Vec<String>>,
    after: Option<DateTime<Utc>>,
    before: Option<DateTime<Utc>>,
    since: Option<u64>,
    min: Option<f64>,
    max: Option<f64>,
    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

/// Raised when a wire filter does not describe a usable constraint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidFilter {
    /// `is`/`not` with no values.
    #[error("keyword filter must name at least one value")]
    EmptyKeywordSet,
    /// Only one of `after`/`before`.
    #[error("time range needs both `after` and `before`")]
    IncompleteTimeRange,
    /// No known key; an open number range is written `{}`.
    #[error("unrecognized filter keys: {keys}")]
    UnknownShape {
        /// Keys that were present.
        keys: String,
    },
}

impl From<Filter> for RawFilter {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::Present { present } => RawFilter::Present { present },
            Filter::KeywordIs(set) => RawFilter::KeywordIs {
                is: set.0.into_iter().collect(),
            },
            Filter::KeywordNot(set) => RawFilter::KeywordNot {
                not: set.0.into_iter().collect(),
            },
            Filter::NumberRange { min, max } => RawFilter::NumberRange { min, max },
            Filter::TimeRange { after, before } => RawFilter::TimeRange { after, before },
            Filter::TimeSince { since } => RawFilter::TimeSince { since },
        }
    }
}

impl TryFrom<RawFilterKeys> for Filter {
    type Error = InvalidFilter;

    fn try_from(raw: RawFilterKeys) -> Result<Self, Self::Error> {
        if let Some(present) = raw.present {
            return Ok(Filter::Present { present });
        }
        if let Some(is) = raw.is {
            return Filter::keyword_is(is).ok_or(InvalidFilter::EmptyKeywordSet);
        }
        if let Some(not) = raw.not {
            return Filter::keyword_not(not).ok_or(InvalidFilter::EmptyKeywordSet);
        }
        match (raw.after, raw.before) {
            (Some(after), Some(before)) => return Ok(Filter::TimeRange { after, before }),
            (None, None) => {}
            _ => return Err(InvalidFilter::IncompleteTimeRange),
        }
        if let Some(since) = raw.since {
            return Ok(Filter::TimeSince { since });
        }
        if raw.min.is_some() || raw.max.is_some() || raw.extra.is_empty() {
            return Ok(Filter::number_range(raw.min, raw.max));
        }
        Err(InvalidFilter::UnknownShape {
            keys: raw.extra.keys().cloned().collect::<Vec<_>>().join(", "),
        })
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
