//! Projection of core view-models onto the server-rendered page.
//!
//! # Design
//! - These modules hold no rules; they read markup, call into `core`, and write back.
//! - Missing contract points are skipped quietly, as a page may not render them.

pub(crate) mod badge;
pub(crate) mod buttons;
pub(crate) mod counters;
pub(crate) mod enhancements;
pub(crate) mod ratings;

use crate::core::error::UiError;
use gloo::utils::document;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

pub(crate) fn by_id(id: &str) -> Option<HtmlElement> {
    document()
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

pub(crate) fn query_all(selector: &str) -> Vec<Element> {
    let Ok(list) = document().query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}

pub(crate) fn missing(selector: &str) -> UiError {
    UiError::MissingElement {
        selector: selector.to_string(),
    }
}

pub(crate) fn set_display(element: &HtmlElement, value: &str) {
    let _ = element.style().set_property("display", value);
}

pub(crate) fn reload_after(delay_ms: u32) {
    gloo::timers::callback::Timeout::new(delay_ms, || {
        let _ = gloo::utils::window().location().reload();
    })
    .forget();
}
