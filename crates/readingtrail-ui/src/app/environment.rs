//! Page environment helpers: embedded configuration and location.

use crate::core::config::{CONFIG_ELEMENT_ID, UiConfig};
use gloo::console;
use gloo::utils::{document, window};

pub(crate) fn load_config() -> UiConfig {
    let Some(element) = document().get_element_by_id(CONFIG_ELEMENT_ID) else {
        return UiConfig::default();
    };
    let raw = element.text_content().unwrap_or_default();
    UiConfig::from_json(&raw).unwrap_or_else(|err| {
        console::error!("ignoring embedded configuration", err.to_string());
        UiConfig::default()
    })
}

pub(crate) fn pathname() -> String {
    window().location().pathname().unwrap_or_default()
}
