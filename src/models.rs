//! Frontend Models
//!
//! Data structures rendered by the widget.

/// One row of the list
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Render key, unique among the rows currently present
    pub id: u32,
    /// Text entered by the user, shown verbatim (may be empty)
    pub label: String,
}

impl Item {
    pub fn new(id: u32, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}
