//! Error primitives for transport, decoding and DOM binding failures.
//!
//! Business rejections (`success: false`) are not errors; they arrive as
//! decoded responses and are surfaced verbatim.

use thiserror::Error;

/// Failure raised while talking to the server or binding to the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// The request never produced a response.
    #[error("request to {path} failed: {detail}")]
    Transport {
        /// Request path.
        path: String,
        /// Transport diagnostic.
        detail: String,
    },
    /// The server answered with a non-success status where a body was required.
    #[error("request to {path} returned status {status}")]
    Status {
        /// Request path.
        path: String,
        /// HTTP status code.
        status: u16,
    },
    /// The response body was not the expected JSON.
    #[error("response from {path} could not be decoded: {detail}")]
    Decode {
        /// Request path.
        path: String,
        /// Decoder diagnostic.
        detail: String,
    },
    /// A DOM contract point was not present on the page.
    #[error("element {selector} is missing")]
    MissingElement {
        /// Selector or id that failed to resolve.
        selector: String,
    },
}

/// Result alias for UI operations.
pub type UiResult<T> = Result<T, UiError>;
