//! JSON-over-HTTP client for the ReadingTrail server.
//!
//! # Design
//! - One client per page boot, shared through `Rc`.
//! - Loan endpoints answer JSON on rejections too, so their status is not checked.
//! - Read endpoints treat any non-2xx status as a failure.

use crate::core::endpoints;
use crate::core::error::{UiError, UiResult};
use gloo_net::http::{Request, Response};
use readingtrail_api_models::{
    BookId, CancelResponse, LoanRequest, LoanResponse, NotificationCountResponse, ReviewRecord,
    ReviewsResponse,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> UiResult<T> {
        let response = Request::get(&endpoints::join(&self.base_url, path))
            .send()
            .await
            .map_err(|err| transport(path, &err))?;
        if !response.ok() {
            return Err(UiError::Status {
                path: path.to_string(),
                status: response.status(),
            });
        }
        decode(path, response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> UiResult<T> {
        let response = Request::post(&endpoints::join(&self.base_url, path))
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|err| transport(path, &err))?
            .send()
            .await
            .map_err(|err| transport(path, &err))?;
        decode(path, response).await
    }

    pub(crate) async fn submit_loan(
        &self,
        path: &str,
        request: &LoanRequest,
    ) -> UiResult<LoanResponse> {
        self.post_json(path, request).await
    }

    pub(crate) async fn cancel_borrow_request(&self, book_id: &BookId) -> UiResult<CancelResponse> {
        self.post_json(
            &endpoints::cancel_borrow_request(book_id),
            &LoanRequest::immediate(),
        )
        .await
    }

    pub(crate) async fn unread_notifications(&self) -> UiResult<u64> {
        let response: NotificationCountResponse =
            self.get_json(endpoints::NOTIFICATION_COUNT).await?;
        Ok(response.unread_count())
    }

    /// Reviews for a book; `None` when the server rejected the request.
    pub(crate) async fn book_reviews(&self, book_id: &BookId) -> UiResult<Option<Vec<ReviewRecord>>> {
        let response: ReviewsResponse = self.get_json(&endpoints::book_reviews(book_id)).await?;
        Ok(response.into_reviews())
    }
}

async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> UiResult<T> {
    let status = response.status();
    response.json::<T>().await.map_err(|err| UiError::Decode {
        path: path.to_string(),
        detail: format!("status {status}: {err}"),
    })
}

fn transport(path: &str, err: &gloo_net::Error) -> UiError {
    UiError::Transport {
        path: path.to_string(),
        detail: err.to_string(),
    }
}
