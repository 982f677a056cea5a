//! Line-oriented driver for the store.
//!
//! Each input line is one user gesture:
//! - `+field` shows a field at the end of the list, `+field@2` at position 2
//! - `-field` hides it
//! - anything else is a search expression (`status:200,404`, `ts:*`, `ts#`)
//!
//! Interpretation is pure; [`process_lines`] is the only part that touches
//! a [`Store`].

use crate::model::FieldsMetadata;
use crate::navigation::Location;
use crate::parser;
use crate::state::{Action, Store};
use tracing::{debug, info};

const ADD_PREFIX: char = '+';
const REMOVE_PREFIX: char = '-';
const POSITION_SEPARATOR: char = '@';

/// Turn one input line into an action, or None if it does not form one.
///
/// Field-list gestures are not checked against `metadata`: a stale field
/// must stay removable, and visibility of an unknown field is harmless.
pub fn interpret_line(line: &str, metadata: &FieldsMetadata) -> Option<Action> {
    let line = line.trim();

    if let Some(rest) = line.strip_prefix(ADD_PREFIX) {
        return add_field(rest.trim());
    }

    if let Some(rest) = line.strip_prefix(REMOVE_PREFIX) {
        let field = rest.trim();
        return (!field.is_empty()).then(|| Action::RemoveField {
            field: field.to_string(),
        });
    }

    parser::parse_search(line, metadata).action
}

fn add_field(text: &str) -> Option<Action> {
    let (field, pos) = match text.split_once(POSITION_SEPARATOR) {
        Some((field, pos)) => match pos.trim().parse::<usize>() {
            Ok(pos) => (field.trim(), Some(pos)),
            Err(e) => {
                debug!(position = pos, error = %e, "Ignoring add with bad position");
                return None;
            }
        },
        None => (text, None),
    };

    if field.is_empty() {
        return None;
    }

    Some(Action::AddField {
        field: field.to_string(),
        pos,
    })
}

/// Outcome of feeding a batch of lines to a store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineReport {
    /// Lines that produced an action.
    pub applied: usize,
    /// Non-blank lines that produced nothing, in input order.
    pub skipped: Vec<String>,
}

/// Feed lines to `store`, syncing navigation before each one so external
/// edits to the location are never overwritten.
pub fn process_lines<L, I>(store: &mut Store<L>, lines: I, metadata: &FieldsMetadata) -> LineReport
where
    L: Location,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut report = LineReport::default();

    for line in lines {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }

        if store.sync_navigation() {
            info!("Location changed externally, state resynchronized");
        }

        match interpret_line(line, metadata) {
            Some(action) => {
                store.dispatch(action);
                report.applied += 1;
            }
            None => report.skipped.push(line.to_string()),
        }
    }

    report
}
