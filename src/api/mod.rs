//! REST API Client
//!
//! Frontend bindings to the remote `/users` service.

mod error;
mod users;

use async_trait::async_trait;

use crate::models::{UserDraft, UserPatch, UserRecord};

pub use error::{ApiError, ApiResult, BoxError, Operation};
pub use users::HttpUserApi;

/// The four remote calls the dashboard makes
///
/// Futures are not `Send`: the browser executor is single-threaded.
#[async_trait(?Send)]
pub trait UserApi {
    /// Fetch the whole collection in service order
    async fn list(&self) -> ApiResult<Vec<UserRecord>>;

    /// Create a user; the returned record carries a placeholder id
    async fn create(&self, draft: &UserDraft) -> ApiResult<UserRecord>;

    /// Replace a user; the returned record is rebuilt from the arguments
    async fn update(&self, id: u32, patch: &UserPatch) -> ApiResult<UserRecord>;

    async fn delete(&self, id: u32) -> ApiResult<()>;
}
