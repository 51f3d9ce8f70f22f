use chrono::{DateTime, NaiveDateTime, Utc};
use garde::Validate;
use kernel::model::{
    event::Event,
    id::{EventId, UserId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    #[garde(length(min = 1))]
    pub title: String,
    /// Wall-clock fields as typed by the creator, in the zone of their
    /// current environment. Anchored to the owner's home zone on storage.
    #[garde(skip)]
    pub civil_instant: NaiveDateTime,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: EventId,
    pub owned_by: UserId,
    pub title: String,
    pub stored_instant: DateTime<Utc>,
}

impl From<Event> for EventResponse {
    fn from(value: Event) -> Self {
        let Event {
            event_id,
            owned_by,
            title,
            stored_instant,
        } = value;
        Self {
            id: event_id,
            owned_by,
            title,
            stored_instant,
        }
    }
}
