use crate::model::id::{EventId, RequestId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub request_id: RequestId,
    pub requested_by: UserId,
    pub event_id: EventId,
    pub requestor_comment: String,
    pub status: RequestStatus,
    pub requestee_comment: String,
}

/// Single transition: Pending -> Approved, performed by the event owner.
/// There is no rejected state and no way back out of Approved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestStatus::Pending => write!(f, "pending"),
            RequestStatus::Approved => write!(f, "approved"),
        }
    }
}
