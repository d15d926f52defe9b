//! Page Setup
//!
//! Body-level tweaks applied once before the widget mounts.

use crate::config::WidgetConfig;
use crate::style::BODY_PADDING;

/// Apply the theme class and padding to `<body>`
pub fn prepare_body(config: &WidgetConfig) -> Result<(), String> {
    let body = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.body())
        .ok_or("no <body> in document")?;

    if !config.body_class.is_empty() {
        body.set_attribute("class", &config.body_class)
            .map_err(|e| format!("{:?}", e))?;
    }
    body.style()
        .set_property("padding", BODY_PADDING)
        .map_err(|e| format!("{:?}", e))?;
    Ok(())
}
