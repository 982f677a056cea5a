//! Search expression parser.
//!
//! Turns one line of free text such as `status:200,404` or `ts:*` into a
//! candidate field prefix and, when the line is complete, an [`Action`].
//! Parsing never fails: an incomplete or unrecognized line simply produces
//! no action, which the UI uses to disable its commit affordance.

use crate::model::FieldsMetadata;
use crate::state::Action;
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::trace;

// Operator string constants
const OP_IS: &str = ":";
const OP_IS_PRESENT: &str = ":*";
const OP_NOT: &str = "!";
const OP_NOT_PRESENT: &str = "!*";
const OP_CLEAR: &str = "#";

/// `<field> <ws>* (<op> <ws>* <argument>)?`, unanchored at the end so a
/// trailing tail that fits nothing is ignored.
static SEARCH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([\w/.\-]*)\s*(?:([!:=@~#]+\*?)\s*(.*))?").expect("search pattern is valid")
});

// ===== SearchOperator =====

/// Operators understood by the search line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOperator {
    /// `:` value is one of the comma-separated arguments.
    Is,
    /// `:*` field has a value.
    IsPresent,
    /// `!` value is none of the comma-separated arguments.
    Not,
    /// `!*` field has no value.
    NotPresent,
    /// `#` drop the field's constraint.
    Clear,
}

/// Operator text that is made of operator characters but means nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown search operator `{0}`")]
pub struct UnknownOperator(pub String);

impl FromStr for SearchOperator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            OP_IS => Ok(SearchOperator::Is),
            OP_IS_PRESENT => Ok(SearchOperator::IsPresent),
            OP_NOT => Ok(SearchOperator::Not),
            OP_NOT_PRESENT => Ok(SearchOperator::NotPresent),
            OP_CLEAR => Ok(SearchOperator::Clear),
            other => Err(UnknownOperator(other.to_string())),
        }
    }
}

impl SearchOperator {
    /// Whether the operator needs an argument to form an action.
    pub fn takes_argument(self) -> bool {
        matches!(self, SearchOperator::Is | SearchOperator::Not)
    }

    /// Build the action for `field`. None if a required argument is missing.
    fn to_action(self, field: &str, argument: &str) -> Option<Action> {
        let values = if self.takes_argument() {
            let values = split_values(argument);
            if values.is_empty() {
                return None;
            }
            values
        } else {
            Vec::new()
        };

        let field = field.to_string();
        Some(match self {
            SearchOperator::Is | SearchOperator::Not => Action::FilterKeywordSet {
                field,
                values,
                include: self == SearchOperator::Is,
            },
            SearchOperator::IsPresent | SearchOperator::NotPresent => Action::FilterPresent {
                field,
                present: self == SearchOperator::IsPresent,
            },
            SearchOperator::Clear => Action::FilterClear { field },
        })
    }
}

/// Comma-split an argument, trimming pieces and dropping empty ones.
fn split_values(argument: &str) -> Vec<String> {
    argument
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
        .collect()
}

// ===== ParsedSearch =====

/// Result of interpreting one search line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSearch<'a> {
    /// Leading field token; empty if the line does not start with one.
    pub field: &'a str,
    /// Operator text, if any operator characters followed the field.
    pub operator: Option<&'a str>,
    /// Text after the operator, trimmed.
    pub argument: Option<&'a str>,
    /// Action the line would commit, if it is complete and names a known field.
    pub action: Option<Action>,
}

/// Interpret one line of search text against the dataset's fields.
pub fn parse_search<'a>(input: &'a str, metadata: &FieldsMetadata) -> ParsedSearch<'a> {
    let Some(captures) = SEARCH_PATTERN.captures(input) else {
        // The pattern matches the empty prefix of any line.
        return ParsedSearch {
            field: "",
            operator: None,
            argument: None,
            action: None,
        };
    };

    let field = captures.get(1).map_or("", |m| m.as_str());
    let operator = captures.get(2).map(|m| m.as_str());
    let argument = captures.get(3).map(|m| m.as_str().trim());

    let action = match operator {
        Some(op) if metadata.contains(field) => match op.parse::<SearchOperator>() {
            Ok(op) => op.to_action(field, argument.unwrap_or("")),
            Err(e) => {
                trace!(error = %e, "No action for search line");
                None
            }
        },
        _ => None,
    };

    ParsedSearch {
        field,
        operator,
        argument,
        action,
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
