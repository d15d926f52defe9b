//! List Utilities
//!
//! Pure operations on the ordered row list. Insertion order is display order.

use crate::models::Item;

/// Next free render key: one past the largest id present, 0 for an empty list.
/// Once the largest id is `u32::MAX`, the lowest unused id is taken instead.
pub fn next_row_id(rows: &[Item]) -> u32 {
    match rows.iter().map(|row| row.id).max() {
        None => 0,
        Some(max) => max.checked_add(1).unwrap_or_else(|| lowest_free_id(rows)),
    }
}

fn lowest_free_id(rows: &[Item]) -> u32 {
    (0..=u32::MAX)
        .find(|id| !rows.iter().any(|row| row.id == *id))
        .unwrap_or(0)
}

/// Append a row as the new last element, returns its id
pub fn append_row(rows: &mut Vec<Item>, label: impl Into<String>) -> u32 {
    let id = next_row_id(rows);
    rows.push(Item::new(id, label));
    id
}

/// Remove exactly the row with `id`, keeping the others in order
pub fn remove_row(rows: &mut Vec<Item>, id: u32) -> Option<Item> {
    let index = rows.iter().position(|row| row.id == id)?;
    Some(rows.remove(index))
}

/// Whether a submitted label becomes a row
pub fn accepts_label(label: &str, reject_blank: bool) -> bool {
    !reject_blank || !label.trim().is_empty()
}
