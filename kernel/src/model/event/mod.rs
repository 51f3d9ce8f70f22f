use crate::model::id::{EventId, UserId};
use chrono::{DateTime, Utc};

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub event_id: EventId,
    pub owned_by: UserId,
    pub title: String,
    /// UTC with no zone name retained. The wall-clock time this was
    /// entered as is only recoverable relative to some zone, and only
    /// while that zone's offset has not changed since creation.
    pub stored_instant: DateTime<Utc>,
}
