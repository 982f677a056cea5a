//! Ordered, duplicate-free list of visible fields.

/// Insert `value` at `pos` (default: end), removing any earlier occurrence.
///
/// When `value` already sat before `pos`, removing it shifts later slots down
/// by one, so the target is decremented to land where the caller pointed.
/// A target past the end appends. The input list is not modified.
pub fn insert_ordered_set(list: &[String], value: &str, pos: Option<usize>) -> Vec<String> {
    let existing = list.iter().position(|f| f == value);
    let mut out: Vec<String> = list.iter().filter(|f| *f != value).cloned().collect();

    let mut target = pos.unwrap_or(list.len());
    if let Some(index) = existing {
        if target > index {
            target -= 1;
        }
    }

    out.insert(target.min(out.len()), value.to_string());
    out
}

/// Drop every occurrence of `value`.
pub fn remove_field(list: &[String], value: &str) -> Vec<String> {
    list.iter().filter(|f| *f != value).cloned().collect()
}
