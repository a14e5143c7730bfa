//! Borrowed-count and notification-count view-models.
//!
//! # Design
//! - Each display instance applies a delta from its own displayed base.
//! - Counts never go below zero.
//! - Notification badges are absolute and hidden at zero.

/// Counter families mirrored in the sidebar and the navbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterKind {
    /// Books currently borrowed by the reader.
    Borrowed,
    /// Unread notifications.
    Notifications,
}

impl CounterKind {
    /// Element id of the sidebar instance.
    #[must_use]
    pub const fn sidebar_id(self) -> &'static str {
        match self {
            Self::Borrowed => "sidebar-borrowed-count",
            Self::Notifications => "sidebar-notification-badge",
        }
    }

    /// Element id of the navbar instance.
    #[must_use]
    pub const fn navbar_id(self) -> &'static str {
        match self {
            Self::Borrowed => "navbar-borrowed-count",
            Self::Notifications => "navbar-notification-badge",
        }
    }
}

/// Parse a displayed count leniently: leading whitespace, optional sign, leading digits.
///
/// Anything without a leading integer reads as zero; oversized values saturate.
#[must_use]
pub fn parse_displayed(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = &rest[..rest.bytes().take_while(u8::is_ascii_digit).count()];
    if digits.is_empty() {
        return 0;
    }
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    if negative { -magnitude } else { magnitude }
}

/// Apply a signed delta to a displayed base, clamping at zero.
#[must_use]
pub fn apply_delta(base: i64, delta: i64) -> u64 {
    u64::try_from(base.saturating_add(delta)).unwrap_or(0)
}

/// Sidebar and navbar borrowed-count instances; `None` means not on this page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BorrowedCounters {
    /// Sidebar value.
    pub sidebar: Option<u64>,
    /// Navbar value.
    pub navbar: Option<u64>,
}

impl BorrowedCounters {
    /// Apply `delta` to each instance using its own displayed text as the base.
    ///
    /// A delta of zero re-renders the current values, which only triggers the pulse.
    #[must_use]
    pub fn from_display(sidebar: Option<&str>, navbar: Option<&str>, delta: i64) -> Self {
        Self {
            sidebar: sidebar.map(|text| apply_delta(parse_displayed(text), delta)),
            navbar: navbar.map(|text| apply_delta(parse_displayed(text), delta)),
        }
    }
}

/// Projection of an absolute notification count onto a badge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationBadge {
    /// Text to display.
    pub text: String,
    /// Whether the badge element is shown at all.
    pub visible: bool,
}

impl NotificationBadge {
    /// Badge state for an unread count.
    #[must_use]
    pub fn from_count(count: u64) -> Self {
        Self {
            text: count.to_string(),
            visible: count > 0,
        }
    }

    /// CSS `display` value for the badge element.
    #[must_use]
    pub const fn display(&self) -> &'static str {
        if self.visible { "inline" } else { "none" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_parse_reads_leading_integer() {
        assert_eq!(parse_displayed("3"), 3);
        assert_eq!(parse_displayed("  12 books"), 12);
        assert_eq!(parse_displayed("-2"), -2);
        assert_eq!(parse_displayed("+4"), 4);
        assert_eq!(parse_displayed(""), 0);
        assert_eq!(parse_displayed("n/a"), 0);
        assert_eq!(parse_displayed("-"), 0);
    }

    #[test]
    fn oversized_display_saturates_instead_of_resetting() {
        assert_eq!(parse_displayed("99999999999999999999"), i64::MAX);
        assert_eq!(parse_displayed("-99999999999999999999"), -i64::MAX);
        let counters = BorrowedCounters::from_display(Some("99999999999999999999"), None, 1);
        assert_eq!(counters.sidebar, Some(i64::MAX.unsigned_abs()));
    }

    #[test]
    fn delta_never_goes_below_zero() {
        assert_eq!(apply_delta(0, -1), 0);
        assert_eq!(apply_delta(1, -1), 0);
        assert_eq!(apply_delta(-5, 2), 0);
        for base in -3..5 {
            for delta in -6..6 {
                let value = apply_delta(base, delta);
                assert!(value == 0 || i64::try_from(value).unwrap_or(0) == base + delta);
            }
        }
    }

    #[test]
    fn instances_update_independently_and_stay_in_sync() {
        let counters = BorrowedCounters::from_display(Some("2"), Some("2"), 1);
        assert_eq!(counters.sidebar, Some(3));
        assert_eq!(counters.navbar, Some(3));
        assert_eq!(counters.sidebar, counters.navbar);

        let only_navbar = BorrowedCounters::from_display(None, Some("0"), -1);
        assert_eq!(only_navbar.sidebar, None);
        assert_eq!(only_navbar.navbar, Some(0));
    }

    #[test]
    fn zero_delta_rerenders_current_value() {
        let counters = BorrowedCounters::from_display(Some("5"), None, 0);
        assert_eq!(counters.sidebar, Some(5));
    }

    #[test]
    fn notification_badge_hides_at_zero() {
        let hidden = NotificationBadge::from_count(0);
        assert!(!hidden.visible);
        assert_eq!(hidden.display(), "none");

        let shown = NotificationBadge::from_count(4);
        assert!(shown.visible);
        assert_eq!(shown.text, "4");
        assert_eq!(shown.display(), "inline");
    }

    #[test]
    fn counter_ids_match_markup() {
        assert_eq!(CounterKind::Borrowed.sidebar_id(), "sidebar-borrowed-count");
        assert_eq!(CounterKind::Borrowed.navbar_id(), "navbar-borrowed-count");
        assert_eq!(CounterKind::Notifications.sidebar_id(), "sidebar-notification-badge");
        assert_eq!(CounterKind::Notifications.navbar_id(), "navbar-notification-badge");
    }
}
