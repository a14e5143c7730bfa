//! Borrowed-count and notification-badge rendering.

use crate::core::counters::{BorrowedCounters, CounterKind, NotificationBadge};
use crate::dom::{by_id, set_display};
use gloo::timers::callback::Timeout;
use web_sys::HtmlElement;

/// Apply a delta to both borrowed counters and pulse them.
pub(crate) fn adjust_borrowed(delta: i64, pulse_ms: u32) {
    let sidebar = by_id(CounterKind::Borrowed.sidebar_id());
    let navbar = by_id(CounterKind::Borrowed.navbar_id());
    let counters = BorrowedCounters::from_display(
        sidebar.as_ref().and_then(text_of).as_deref(),
        navbar.as_ref().and_then(text_of).as_deref(),
        delta,
    );
    for (element, value) in [(sidebar, counters.sidebar), (navbar, counters.navbar)] {
        if let (Some(element), Some(value)) = (element, value) {
            element.set_text_content(Some(&value.to_string()));
            pulse(element, pulse_ms);
        }
    }
}

/// Set both notification badges to an absolute unread count.
pub(crate) fn show_notifications(count: u64) {
    let badge = NotificationBadge::from_count(count);
    for id in [
        CounterKind::Notifications.sidebar_id(),
        CounterKind::Notifications.navbar_id(),
    ] {
        if let Some(element) = by_id(id) {
            if badge.visible {
                element.set_text_content(Some(&badge.text));
            }
            set_display(&element, badge.display());
        }
    }
}

fn text_of(element: &HtmlElement) -> Option<String> {
    element.text_content()
}

fn pulse(element: HtmlElement, pulse_ms: u32) {
    let style = element.style();
    let _ = style.set_property("transform", "scale(1.2)");
    Timeout::new(pulse_ms, move || {
        let _ = element.style().set_property("transform", "scale(1)");
    })
    .forget();
}
