//! Widget Configuration
//!
//! Optional settings read from an inline JSON `<script>` in the host page:
//!
//! ```html
//! <script id="task-list-config" type="application/json">
//!   { "placeholder": "Enter a task", "reject_blank": false }
//! </script>
//! ```
//!
//! Missing fields fall back to defaults, unknown fields are ignored.

use serde::Deserialize;
use wasm_bindgen::JsCast;

/// Id of the config element in the host page
pub const CONFIG_ELEMENT_ID: &str = "task-list-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Input placeholder text
    pub placeholder: String,
    /// Submit button text
    pub button_label: String,
    /// Input `name` attribute
    pub input_name: String,
    /// Class set on `<body>` at startup, empty leaves it untouched
    pub body_class: String,
    /// Ignore submissions that are empty after trimming
    pub reject_blank: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            placeholder: "Enter a task".to_string(),
            button_label: "Add".to_string(),
            input_name: "task".to_string(),
            body_class: "dark".to_string(),
            reject_blank: false,
        }
    }
}

/// Parse config JSON
pub fn parse_config(raw: &str) -> Result<WidgetConfig, String> {
    serde_json::from_str(raw).map_err(|e| e.to_string())
}

/// Read the config element from the document.
/// `Ok(None)` when the page carries no config.
pub fn read_config() -> Result<Option<WidgetConfig>, String> {
    let document = web_sys::window()
        .and_then(|win| win.document())
        .ok_or("no document")?;

    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(None);
    };
    let script = element
        .dyn_into::<web_sys::HtmlScriptElement>()
        .map_err(|_| format!("#{} is not a <script> element", CONFIG_ELEMENT_ID))?;
    let raw = script.text().map_err(|e| format!("{:?}", e))?;

    parse_config(&raw).map(Some)
}

/// Load config, falling back to defaults on any problem
pub fn load_config() -> WidgetConfig {
    match read_config() {
        Ok(Some(config)) => {
            web_sys::console::log_1(&format!("[CONFIG] Loaded {:?}", config).into());
            config
        }
        Ok(None) => WidgetConfig::default(),
        Err(e) => {
            web_sys::console::warn_1(&format!("[CONFIG] Using defaults: {}", e).into());
            WidgetConfig::default()
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Insert `<tag id="task-list-config">text</tag>` into `<body>`
    fn insert_config_element(tag: &str, text: &str) -> web_sys::Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let element = document.create_element(tag).unwrap();
        element.set_id(CONFIG_ELEMENT_ID);
        if tag == "script" {
            element.set_attribute("type", "application/json").unwrap();
        }
        element.set_text_content(Some(text));
        document.body().unwrap().append_child(&element).unwrap();
        element
    }

    #[wasm_bindgen_test]
    fn test_missing_element_gives_defaults() {
        assert_eq!(read_config(), Ok(None));
        assert_eq!(load_config(), WidgetConfig::default());
    }

    #[wasm_bindgen_test]
    fn test_non_script_element_falls_back() {
        let element = insert_config_element("div", r#"{"button_label": "Save"}"#);

        let err = read_config().unwrap_err();
        assert!(err.contains("not a <script>"), "{}", err);
        assert_eq!(load_config(), WidgetConfig::default());

        element.remove();
    }

    #[wasm_bindgen_test]
    fn test_invalid_json_falls_back() {
        let element = insert_config_element("script", "{ placeholder: ");

        assert!(read_config().is_err());
        assert_eq!(load_config(), WidgetConfig::default());

        element.remove();
    }

    #[wasm_bindgen_test]
    fn test_valid_script_is_loaded() {
        let element = insert_config_element(
            "script",
            r#"{"placeholder": "What next?", "reject_blank": true}"#,
        );

        let expected = WidgetConfig {
            placeholder: "What next?".to_string(),
            reject_blank: true,
            ..WidgetConfig::default()
        };
        assert_eq!(read_config(), Ok(Some(expected.clone())));
        assert_eq!(load_config(), expected);

        element.remove();
    }
}
