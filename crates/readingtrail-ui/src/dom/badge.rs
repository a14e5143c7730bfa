//! Cover badge insertion and removal for the card enclosing a loan button.

use crate::core::badge::{BadgeChange, BadgeScope, COVER_SELECTOR, CoverBadge, OVERLAY_CLASSES};
use crate::core::error::UiResult;
use crate::dom::{closest, missing};
use crate::i18n::TranslationBundle;
use gloo::utils::document;
use web_sys::Element;

const CARD_SELECTOR: &str = ".card";

pub(crate) fn apply(
    button: &Element,
    change: BadgeChange,
    bundle: &TranslationBundle,
) -> UiResult<()> {
    let card = closest(button, CARD_SELECTOR).ok_or_else(|| missing(CARD_SELECTOR))?;
    let cover = card.query_selector(COVER_SELECTOR).ok().flatten();
    let (scope, selector) = change.presence();
    let existing = match scope {
        BadgeScope::Card => card.query_selector(selector).ok().flatten(),
        BadgeScope::Cover => cover
            .as_ref()
            .and_then(|cover| cover.query_selector(selector).ok().flatten()),
    };
    let mut badge = CoverBadge::observed(existing.is_some());
    if !change.apply(&mut badge) {
        return Ok(());
    }
    match change {
        BadgeChange::Add => {
            let cover = cover.ok_or_else(|| missing(COVER_SELECTOR))?;
            insert(&cover, bundle);
        }
        BadgeChange::Remove => {
            if let Some(overlay) = existing {
                overlay.remove();
            }
        }
    }
    Ok(())
}

fn insert(cover: &Element, bundle: &TranslationBundle) {
    let document = document();
    let (Ok(wrapper), Ok(badge), Ok(icon)) = (
        document.create_element("div"),
        document.create_element("span"),
        document.create_element("i"),
    ) else {
        return;
    };
    wrapper.set_class_name(OVERLAY_CLASSES);
    badge.set_class_name("badge bg-success");
    icon.set_class_name("fas fa-check me-1");
    let _ = badge.append_child(&icon);
    let label = document.create_text_node(&bundle.text("loan.borrowed_badge", ""));
    let _ = badge.append_child(&label);
    let _ = wrapper.append_child(&badge);
    let _ = cover.append_child(&wrapper);
}
