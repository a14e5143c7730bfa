//! Page-wide enhancements: keyboard shortcuts, search busy state, lazy images
//! and the animation styles the loan flow relies on.

use crate::core::shortcuts::{
    SEARCH_FORM_SELECTOR, SEARCH_INPUT_SELECTOR, ShortcutAction, should_clear,
};
use crate::dom::query_all;
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::document;
use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Element, HtmlImageElement, HtmlInputElement, IntersectionObserver, IntersectionObserverEntry,
    KeyboardEvent,
};

const STYLE_ELEMENT_ID: &str = "readingtrail-styles";
const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";

const STYLES: &str = "
@keyframes fadeOut {
    from { opacity: 1; transform: scale(1); }
    to { opacity: 0; transform: scale(0.9); }
}
.achievement-modal .modal-content {
    background: linear-gradient(135deg, #f39c12, #e67e22);
    color: white;
    border: none;
    border-radius: 20px;
}
.achievement-icon-large {
    width: 80px;
    height: 80px;
    margin: 0 auto;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 2.5rem;
    background: rgba(255, 255, 255, 0.2);
}
";

pub(crate) fn inject_styles() {
    let document = document();
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return;
    }
    let (Ok(style), Some(head)) = (
        document.create_element("style"),
        document.query_selector("head").ok().flatten(),
    ) else {
        return;
    };
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(STYLES));
    let _ = head.append_child(&style);
}

pub(crate) fn bind_shortcuts() {
    EventListener::new(&document(), "keydown", |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let Some(action) =
            ShortcutAction::from_key(&event.key(), event.ctrl_key(), event.meta_key())
        else {
            return;
        };
        let Some(input) = search_input() else {
            return;
        };
        if action.prevents_default() {
            event.prevent_default();
        }
        match action {
            ShortcutAction::FocusSearch => {
                let _ = input.focus();
            }
            ShortcutAction::ClearSearch => {
                let focused = document()
                    .active_element()
                    .is_some_and(|active| active == *input.unchecked_ref::<Element>());
                if should_clear(focused, &input.value()) {
                    input.set_value("");
                }
            }
        }
    })
    .forget();
}

pub(crate) fn bind_search_busy() {
    let Some(form) = query_all(SEARCH_FORM_SELECTOR).into_iter().next() else {
        return;
    };
    let target = form.clone();
    EventListener::new(&target, "submit", move |_| {
        if let Some(button) = form
            .query_selector("button[type=\"submit\"]")
            .ok()
            .flatten()
        {
            let _ = button.class_list().add_1("loading");
            let _ = button.set_attribute("disabled", "");
        }
    })
    .forget();
}

pub(crate) fn lazy_load_images() {
    let images: Vec<HtmlImageElement> = query_all(LAZY_IMAGE_SELECTOR)
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlImageElement>().ok())
        .collect();
    if images.is_empty() {
        return;
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                if let Ok(image) = entry.target().dyn_into::<HtmlImageElement>() {
                    reveal(&image);
                    observer.unobserve(&image);
                }
            }
        },
    );
    match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => {
            for image in &images {
                observer.observe(image);
            }
            callback.forget();
        }
        Err(_) => {
            console::debug!("IntersectionObserver unavailable; loading images eagerly");
            for image in &images {
                reveal(image);
            }
        }
    }
}

fn reveal(image: &HtmlImageElement) {
    if let Some(source) = image.get_attribute("data-src") {
        image.set_src(&source);
    }
    let _ = image.class_list().remove_1("lazy");
}

fn search_input() -> Option<HtmlInputElement> {
    document()
        .query_selector(SEARCH_INPUT_SELECTOR)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
}
