use garde::Validate;
use kernel::model::{
    id::{EventId, RequestId, UserId},
    request::{Request, RequestStatus},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MakeRequestRequest {
    #[garde(skip)]
    pub event_id: EventId,
    // An empty comment is allowed.
    #[garde(skip)]
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApproveRequestRequest {
    #[garde(skip)]
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestResponse {
    pub id: RequestId,
    pub requested_by: UserId,
    pub event_id: EventId,
    pub requestor_comment: String,
    pub status: RequestStatus,
    pub requestee_comment: String,
}

impl From<Request> for RequestResponse {
    fn from(value: Request) -> Self {
        let Request {
            request_id,
            requested_by,
            event_id,
            requestor_comment,
            status,
            requestee_comment,
        } = value;
        Self {
            id: request_id,
            requested_by,
            event_id,
            requestor_comment,
            status,
            requestee_comment,
        }
    }
}
