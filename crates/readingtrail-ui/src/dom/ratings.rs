//! Lazy rating summaries for catalog placeholders.

use crate::core::rating::{PLACEHOLDER_SELECTOR, RatingView};
use crate::dom::{by_id, query_all, set_display};
use crate::services::api::ApiClient;
use gloo::console;
use gloo::utils::document;
use readingtrail_api_models::BookId;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

/// Start one independent load per placeholder on the page.
pub(crate) fn load_all(client: &Rc<ApiClient>) {
    for placeholder in query_all(PLACEHOLDER_SELECTOR) {
        let Some(raw_id) = placeholder.get_attribute("data-book-id") else {
            continue;
        };
        let client = Rc::clone(client);
        spawn_local(async move {
            let book_id = BookId::new(raw_id);
            let reviews = match client.book_reviews(&book_id).await {
                Ok(reviews) => reviews,
                Err(err) => {
                    console::debug!("rating load failed", err.to_string());
                    None
                }
            };
            render(&placeholder, &book_id, &RatingView::from_reviews(reviews.as_deref()));
        });
    }
}

fn render(placeholder: &Element, book_id: &BookId, view: &RatingView) {
    match view {
        RatingView::Hidden => hide(placeholder),
        RatingView::Shown { stars, text } => {
            let (Some(stars_element), Some(text_element)) = (
                by_id(&format!("stars-{book_id}")),
                by_id(&format!("rating-text-{book_id}")),
            ) else {
                return;
            };
            stars_element.set_text_content(None);
            let document = document();
            for filled in stars {
                if let Ok(star) = document.create_element("span") {
                    star.set_class_name(if *filled { "star" } else { "star empty" });
                    star.set_text_content(Some("★"));
                    let _ = stars_element.append_child(&star);
                }
            }
            text_element.set_text_content(Some(text));
            let _ = placeholder.class_list().add_1("loaded");
        }
    }
}

fn hide(placeholder: &Element) {
    if let Some(element) = placeholder.dyn_ref::<web_sys::HtmlElement>() {
        set_display(element, "none");
    }
}
