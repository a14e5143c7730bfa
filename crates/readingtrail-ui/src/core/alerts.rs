//! Transient alert model backing the alert container.
//!
//! # Design
//! - Alerts are typed `(kind, message)`; unknown severities map to danger.
//! - Ids are monotonic so timers can dismiss a specific alert.
//! - Dismissal is idempotent; a timer firing after a manual close is harmless.

/// Default delay before an alert closes itself.
pub const DEFAULT_DISMISS_MS: u32 = 5_000;

/// Alert severity, mapped onto the page's alert styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AlertKind {
    /// Completed action.
    Success,
    /// Rejected or failed action.
    Danger,
    /// Cautionary notice.
    Warning,
    /// Neutral notice.
    #[default]
    Info,
}

impl AlertKind {
    /// Parse a severity string; anything unrecognised (including `error`) is danger.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "success" => Self::Success,
            "warning" => Self::Warning,
            "info" => Self::Info,
            _ => Self::Danger,
        }
    }

    /// Severity name used in the `alert-{kind}` class.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Font Awesome icon name shown before the message.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Success => "check-circle",
            Self::Danger | Self::Warning => "exclamation-triangle",
            Self::Info => "info-circle",
        }
    }

    /// Alert CSS class.
    #[must_use]
    pub fn class(self) -> String {
        format!("alert-{}", self.as_str())
    }
}

/// Single alert currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    /// Stack-unique identifier.
    pub id: u64,
    /// Severity.
    pub kind: AlertKind,
    /// Message text (rendered as text, never as markup).
    pub message: String,
}

/// Ordered alerts for the container.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlertStack {
    alerts: Vec<Alert>,
    next_id: u64,
}

impl AlertStack {
    /// Append an alert and return its id.
    pub fn push(&mut self, kind: AlertKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.alerts.push(Alert {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Remove an alert; returns whether it was present.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|alert| alert.id != id);
        before != self.alerts.len()
    }

    /// Alerts in insertion order.
    #[must_use]
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }
}
