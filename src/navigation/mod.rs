//! Navigation locations.
//!
//! A location is the slot the encoded state lives in: the URL fragment in a
//! browser, or a file for the command-line shell. The state holder only
//! talks to it through [`Location`]:
//! - `read` the current fragment text
//! - `write` a new fragment, replacing the current history entry
//! - `take_change` to poll for an external navigation (back/forward, an edit
//!   by another process)

pub mod file;
pub mod memory;

pub use file::FileLocation;
pub use memory::MemoryLocation;

/// Read/write capability over the navigation slot holding the fragment.
pub trait Location {
    /// Current fragment text. Empty when there is none.
    fn read(&self) -> String;

    /// Replace the current entry's fragment.
    ///
    /// Must not report a change through [`Location::take_change`]; the state
    /// holder already knows what it wrote.
    fn write(&mut self, text: &str);

    /// Fragment text of the most recent external navigation since the last
    /// call, if any.
    fn take_change(&mut self) -> Option<String>;
}
