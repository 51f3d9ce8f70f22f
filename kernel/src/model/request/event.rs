use crate::model::id::{EventId, RequestId, UserId};
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateRequest {
    pub requested_by: UserId,
    pub event_id: EventId,
    pub requestor_comment: String,
    /// Seeded from the event owner's default response text.
    pub requestee_comment: String,
}

#[derive(Debug, new)]
pub struct ApproveRequest {
    pub request_id: RequestId,
    pub requestee_comment: String,
}
