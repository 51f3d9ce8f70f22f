use crate::model::{
    id::RequestId,
    request::{
        event::{ApproveRequest, CreateRequest},
        Request,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait RequestRepository: Send + Sync {
    async fn create(&self, event: CreateRequest) -> AppResult<Request>;
    async fn find_by_id(&self, request_id: RequestId) -> AppResult<Option<Request>>;
    /// Requests in creation (id) order; reports depend on this ordering.
    async fn find_all(&self) -> AppResult<Vec<Request>>;
    async fn approve(&self, event: ApproveRequest) -> AppResult<()>;
}
