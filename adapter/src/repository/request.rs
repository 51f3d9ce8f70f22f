use async_trait::async_trait;
use kernel::model::{
    id::RequestId,
    request::{
        event::{ApproveRequest, CreateRequest},
        Request, RequestStatus,
    },
};
use kernel::repository::request::RequestRepository;
use shared::error::{AppError, AppResult};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct RequestRepositoryImpl {
    rows: RwLock<Vec<Request>>,
}

impl RequestRepositoryImpl {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RequestRepository for RequestRepositoryImpl {
    async fn create(&self, event: CreateRequest) -> AppResult<Request> {
        let mut rows = self.rows.write().await;
        let row = Request {
            request_id: RequestId::new(rows.len() as u64),
            requested_by: event.requested_by,
            event_id: event.event_id,
            requestor_comment: event.requestor_comment,
            status: RequestStatus::Pending,
            requestee_comment: event.requestee_comment,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, request_id: RequestId) -> AppResult<Option<Request>> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|r| r.request_id == request_id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Request>> {
        // Insertion order is id order; reports rely on it.
        Ok(self.rows.read().await.clone())
    }

    async fn approve(&self, event: ApproveRequest) -> AppResult<()> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|r| r.request_id == event.request_id) {
            Some(request) => {
                request.status = RequestStatus::Approved;
                request.requestee_comment = event.requestee_comment;
                Ok(())
            }
            None => Err(AppError::EntityNotFound(format!(
                "request ({}) was not found",
                event.request_id
            ))),
        }
    }
}
