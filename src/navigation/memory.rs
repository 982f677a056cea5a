//! In-memory location with browser-style history.

use crate::navigation::Location;

/// History stack of fragments with a cursor.
///
/// `write` replaces the current entry (like `history.replaceState`), `push`
/// adds a new one (a new dataset selection), and `back`/`forward` move the
/// cursor and queue a change event (like `popstate`).
#[derive(Debug, Clone)]
pub struct MemoryLocation {
    entries: Vec<String>,
    index: usize,
    pending: Option<String>,
}

impl MemoryLocation {
    /// A history with a single entry holding `fragment`.
    pub fn new(fragment: impl Into<String>) -> Self {
        Self {
            entries: vec![fragment.into()],
            index: 0,
            pending: None,
        }
    }

    /// Navigate to a new entry, discarding any forward history.
    pub fn push(&mut self, fragment: impl Into<String>) {
        self.entries.truncate(self.index + 1);
        self.entries.push(fragment.into());
        self.index = self.entries.len() - 1;
    }

    /// Step back one entry. Returns false at the start of history.
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        self.pending = Some(self.entries[self.index].clone());
        true
    }

    /// Step forward one entry. Returns false at the end of history.
    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        self.pending = Some(self.entries[self.index].clone());
        true
    }

    /// Number of history entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a history has at least one entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl Location for MemoryLocation {
    fn read(&self) -> String {
        self.entries[self.index].clone()
    }

    fn write(&mut self, text: &str) {
        self.entries[self.index] = text.to_string();
    }

    fn take_change(&mut self) -> Option<String> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_replaces_current_entry() {
        let mut location = MemoryLocation::new("a");
        location.write("b");
        assert_eq!(location.read(), "b");
        assert_eq!(location.len(), 1);
    }

    #[test]
    fn write_does_not_emit_change() {
        let mut location = MemoryLocation::new("a");
        location.write("b");
        assert_eq!(location.take_change(), None);
    }

    #[test]
    fn back_and_forward_emit_changes() {
        let mut location = MemoryLocation::new("one");
        location.push("two");
        assert_eq!(location.take_change(), None);

        assert!(location.back());
        assert_eq!(location.take_change(), Some("one".to_string()));
        assert_eq!(location.take_change(), None);

        assert!(location.forward());
        assert_eq!(location.take_change(), Some("two".to_string()));
    }

    #[test]
    fn back_at_start_is_noop() {
        let mut location = MemoryLocation::default();
        assert!(!location.back());
        assert!(!location.forward());
        assert_eq!(location.take_change(), None);
    }

    #[test]
    fn push_discards_forward_history() {
        let mut location = MemoryLocation::new("one");
        location.push("two");
        location.back();
        location.push("three");
        assert_eq!(location.len(), 2);
        assert!(!location.forward());
        assert_eq!(location.read(), "three");
    }

    #[test]
    fn back_restores_text_written_to_earlier_entry() {
        let mut location = MemoryLocation::new("one");
        location.write("one-edited");
        location.push("two");
        location.back();
        assert_eq!(location.take_change(), Some("one-edited".to_string()));
    }
}
