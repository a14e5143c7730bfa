//! Loan button hydration and rendering.

use crate::core::loan::{
    BOOK_ID_ATTR, BOOK_TITLE_ATTR, ButtonVisual, DUE_DATE_SOURCE_ATTR, LOAN_BUTTON_SELECTOR,
    LoanButtonModel, LoanMode, MANAGED_CLASSES,
};
use crate::dom::{by_id, query_all};
use crate::i18n::TranslationBundle;
use chrono::NaiveDate;
use gloo::utils::document;
use readingtrail_api_models::BookId;
use std::collections::HashMap;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

/// Elements rendered for each book, keyed by book id.
pub(crate) type ButtonRegistry = HashMap<BookId, Vec<Element>>;

/// Read every loan button on the page into view-models.
pub(crate) fn hydrate() -> (Vec<LoanButtonModel>, ButtonRegistry) {
    let mut models = Vec::new();
    let mut registry = ButtonRegistry::new();
    for element in query_all(LOAN_BUTTON_SELECTOR) {
        let Some(book_id) = element.get_attribute(BOOK_ID_ATTR).map(BookId::new) else {
            continue;
        };
        let Some(mode) = LoanMode::from_classes(&element.class_name()) else {
            continue;
        };
        let title = element.get_attribute(BOOK_TITLE_ATTR).unwrap_or_default();
        registry.entry(book_id.clone()).or_default().push(element);
        models.push(LoanButtonModel::new(book_id, title, mode));
    }
    (models, registry)
}

/// Proposed due date read from the input named by the button, if any.
pub(crate) fn proposed_due_date(button: &Element) -> Option<NaiveDate> {
    let source = button.get_attribute(DUE_DATE_SOURCE_ATTR)?;
    let input = by_id(source.trim_start_matches('#'))?.dyn_into::<HtmlInputElement>().ok()?;
    NaiveDate::parse_from_str(input.value().trim(), "%Y-%m-%d").ok()
}

/// Project a model onto every element registered for its book.
pub(crate) fn render(elements: &[Element], model: &LoanButtonModel, bundle: &TranslationBundle) {
    let visual = model.visual();
    for element in elements {
        render_one(element, &visual, bundle);
    }
}

fn render_one(element: &Element, visual: &ButtonVisual, bundle: &TranslationBundle) {
    let class_list = element.class_list();
    for class in MANAGED_CLASSES {
        let _ = class_list.remove_1(class);
    }
    for class in visual.classes() {
        let _ = class_list.add_1(class);
    }
    if visual.disabled {
        let _ = element.set_attribute("disabled", "");
    } else {
        let _ = element.remove_attribute("disabled");
    }

    element.set_text_content(None);
    let document = document();
    if let Ok(icon) = document.create_element("i") {
        icon.set_class_name(&format!("fas {} me-1", visual.icon));
        let _ = element.append_child(&icon);
    }
    let label = document.create_text_node(&bundle.text(visual.label_key, ""));
    let _ = element.append_child(&label);
}
