//! Inline styles for the widget.

pub const INPUT_STYLE: &str =
    "padding: 10px; border: 1px solid #ccc; border-radius: 5px; margin-right: 10px;";

pub const BUTTON_STYLE: &str =
    "padding: 10px 20px; background-color: #007bff; color: #fff; border: none; border-radius: 5px; cursor: pointer;";

pub const LIST_STYLE: &str = "list-style-type: none; width: max-content; padding: 0;";

pub const ROW_BACKGROUND: &str = "#f8f9fa";
pub const ROW_BACKGROUND_HOVER: &str = "#e9ecef";

/// Full row style for the given background color
pub fn row_style(background: &str) -> String {
    format!(
        "background-color: {}; padding: 10px; margin-bottom: 5px; border-radius: 5px; cursor: pointer;",
        background
    )
}

pub const BODY_PADDING: &str = "20px";
