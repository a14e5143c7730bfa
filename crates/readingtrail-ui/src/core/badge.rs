//! "Borrowed" badge overlay on a book cover.

/// Selector for the cover container that hosts the badge.
pub const COVER_SELECTOR: &str = ".book-cover-container, .book-cover-container-large";
/// Selector matching an existing badge overlay inside a card.
pub const OVERLAY_SELECTOR: &str = ".position-absolute.top-0.end-0";
/// Selector matching a badge already shown on the cover.
pub const BADGE_SELECTOR: &str = ".badge";
/// Classes of the overlay wrapper.
pub const OVERLAY_CLASSES: &str = "position-absolute top-0 end-0 m-2";

/// Badge presence on one cover; idempotent in both directions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CoverBadge {
    present: bool,
}

impl CoverBadge {
    /// Badge state observed on the page.
    #[must_use]
    pub const fn observed(present: bool) -> Self {
        Self { present }
    }

    /// Mark the badge present; returns whether an overlay must be inserted.
    pub const fn add(&mut self) -> bool {
        let changed = !self.present;
        self.present = true;
        changed
    }

    /// Mark the badge absent; returns whether an overlay must be removed.
    pub const fn remove(&mut self) -> bool {
        let changed = self.present;
        self.present = false;
        changed
    }
}

/// Direction of a badge change requested by a loan action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeChange {
    /// Show the badge.
    Add,
    /// Hide the badge.
    Remove,
}

/// Element a presence lookup is scoped to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeScope {
    /// The cover container inside the card.
    Cover,
    /// The whole card.
    Card,
}

impl BadgeChange {
    /// Where to look, and for what, when deciding whether the badge is present.
    ///
    /// Adding only counts a badge already on the cover, so unrelated overlays in
    /// the card do not block it; removal takes the card's overlay.
    #[must_use]
    pub const fn presence(self) -> (BadgeScope, &'static str) {
        match self {
            Self::Add => (BadgeScope::Cover, BADGE_SELECTOR),
            Self::Remove => (BadgeScope::Card, OVERLAY_SELECTOR),
        }
    }

    /// Apply the change; returns whether the DOM needs touching.
    pub const fn apply(self, badge: &mut CoverBadge) -> bool {
        match self {
            Self::Add => badge.add(),
            Self::Remove => badge.remove(),
        }
    }
}
