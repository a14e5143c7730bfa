//! Page classification used to pick loan-action behaviour.

use serde::Deserialize;

/// Kind of server-rendered page the UI is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    /// Catalog listing with one card per book.
    #[default]
    Catalog,
    /// Single book detail page.
    Detail,
    /// Reader dashboard listing only borrowed books.
    Dashboard,
}

impl PageKind {
    /// Classify a location pathname.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        if trimmed == "/dashboard" {
            Self::Dashboard
        } else if trimmed.starts_with("/book/") {
            Self::Detail
        } else {
            Self::Catalog
        }
    }

    /// Whether a successful return removes the book card instead of flipping the button.
    #[must_use]
    pub const fn removes_returned_cards(self) -> bool {
        matches!(self, Self::Dashboard)
    }
}

/// Whether the dashboard should reload after a card removal.
///
/// `remaining` counts the return controls still on the page once the card is gone.
#[must_use]
pub const fn dashboard_should_reload(remaining: usize) -> bool {
    remaining <= 1
}
