#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the ReadingTrail server endpoints consumed by the web UI.
//!
//! The server is treated as an opaque collaborator: these types only describe
//! the JSON it exchanges. Decoding is lenient where the server is known to omit
//! fields (`new_achievements`, `message`) so the UI never fails on a shape it
//! can still act on.
use std::fmt::{self, Display, Formatter};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Opaque book identifier as rendered by the server templates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    /// Wrap a raw identifier.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Raw identifier as it appears in markup and URLs.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for BookId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl From<&str> for BookId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Body for `POST /borrow/{id}`; serialises to `{}` when no due date is proposed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Due date proposed by the reader; requires librarian approval server-side.
    pub proposed_due_date: Option<NaiveDate>,
}

impl LoanRequest {
    /// Request without a proposed due date.
    #[must_use]
    pub const fn immediate() -> Self {
        Self {
            proposed_due_date: None,
        }
    }

    /// Request carrying a proposed due date.
    #[must_use]
    pub const fn with_due_date(date: NaiveDate) -> Self {
        Self {
            proposed_due_date: Some(date),
        }
    }
}

/// Gamification reward granted by the server after a loan action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementRecord {
    /// Font Awesome icon class (for example `fa-book`).
    #[serde(default)]
    pub icon: String,
    /// Display name of the achievement.
    pub name: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Points awarded.
    #[serde(default)]
    pub points: i64,
}

/// Response body for `POST /borrow/{id}` and `POST /return/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanResponse {
    /// Whether the server accepted the action.
    pub success: bool,
    /// Server-supplied, already localised message.
    #[serde(default)]
    pub message: String,
    /// Achievements unlocked by this action, in award order.
    #[serde(default)]
    pub new_achievements: Vec<AchievementRecord>,
}

/// Response body for `POST /cancel_borrow_request/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelResponse {
    /// Whether the pending request was cancelled.
    pub success: bool,
    /// Optional server message; absent on some failure paths.
    #[serde(default)]
    pub message: Option<String>,
}

/// Payload nested under `data` by `GET /api/notifications/count`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationCountData {
    /// Unread notifications for the signed-in reader.
    #[serde(default)]
    pub unread_count: u64,
}

/// Response body for `GET /api/notifications/count`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationCountResponse {
    /// Envelope payload; missing when the server had nothing to report.
    #[serde(default)]
    pub data: Option<NotificationCountData>,
}

impl NotificationCountResponse {
    /// Unread count, defaulting to zero when the envelope is empty.
    #[must_use]
    pub fn unread_count(&self) -> u64 {
        self.data.map_or(0, |data| data.unread_count)
    }
}

/// Single review row; only the rating is consumed by the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Star rating, 1 to 5.
    pub rating: f64,
    /// Review identifier when supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

/// Page of reviews nested under `data` in the enveloped response shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewsPage {
    /// Reviews on this page.
    #[serde(default)]
    pub reviews: Vec<ReviewRecord>,
}

/// Response body for `GET /api/books/{id}/reviews`.
///
/// Accepts both the flat `{success, reviews}` shape and the
/// `{message, data: {reviews}}` envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewsResponse {
    /// Explicit success flag when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    /// Flat review list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<ReviewRecord>>,
    /// Enveloped review page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ReviewsPage>,
}

impl ReviewsResponse {
    /// Extract the review list.
    ///
    /// Returns `None` when the server reported `success: false` or when no
    /// review list is present in either shape.
    #[must_use]
    pub fn into_reviews(self) -> Option<Vec<ReviewRecord>> {
        if self.success == Some(false) {
            return None;
        }
        self.reviews.or_else(|| self.data.map(|page| page.reviews))
    }
}
