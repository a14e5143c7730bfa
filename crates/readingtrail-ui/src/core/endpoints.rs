//! Endpoint path builders for the server routes the UI consumes.

use readingtrail_api_models::BookId;
use urlencoding::encode;

/// Unread notification count.
pub const NOTIFICATION_COUNT: &str = "/api/notifications/count";

/// `POST /borrow/{id}`.
#[must_use]
pub fn borrow(book_id: &BookId) -> String {
    format!("/borrow/{}", encode(book_id.as_str()))
}

/// `POST /return/{id}`.
#[must_use]
pub fn return_book(book_id: &BookId) -> String {
    format!("/return/{}", encode(book_id.as_str()))
}

/// `POST /cancel_borrow_request/{id}`.
#[must_use]
pub fn cancel_borrow_request(book_id: &BookId) -> String {
    format!("/cancel_borrow_request/{}", encode(book_id.as_str()))
}

/// `GET /api/books/{id}/reviews`.
#[must_use]
pub fn book_reviews(book_id: &BookId) -> String {
    format!("/api/books/{}/reviews", encode(book_id.as_str()))
}

/// Join a configured base URL and a root-relative path.
#[must_use]
pub fn join(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}
