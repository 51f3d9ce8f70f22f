use crate::model::id::UserId;
use chrono::{DateTime, Utc};
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateEvent {
    pub owned_by: UserId,
    pub title: String,
    pub stored_instant: DateTime<Utc>,
}
