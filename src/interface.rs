#![allow(async_fn_in_trait)]

use crate::error::Result;
use crate::model::dtos::{HttpReply, RosterParams};

/// Common trait for HTTP client functionality
pub trait HttpClient {
    /// Create a new HTTP client instance pointed at the given backend
    async fn new(base_url: &str) -> Result<Self>
    where
        Self: Sized;
}

/// The three board endpoints. Implementations percent-encode activity names
/// and participant emails before they hit the wire.
pub trait BoardApi {
    /// GET the activity listing. The body is only parsed on a 2xx status;
    /// otherwise the reply carries the status and a null body.
    async fn list_activities(&self) -> Result<HttpReply>;

    /// POST a signup for an activity/participant pair. The body is parsed
    /// regardless of status: the server reports failures as JSON `detail`.
    async fn sign_up(&self, params: RosterParams<'_>) -> Result<HttpReply>;

    /// POST an unregister for an activity/participant pair. Body handling
    /// matches [`BoardApi::sign_up`].
    async fn unregister(&self, params: RosterParams<'_>) -> Result<HttpReply>;
}
