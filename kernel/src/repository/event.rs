use crate::model::{
    event::{event::CreateEvent, Event},
    id::EventId,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: CreateEvent) -> AppResult<Event>;
    async fn find_by_id(&self, event_id: EventId) -> AppResult<Option<Event>>;
    async fn find_all(&self) -> AppResult<Vec<Event>>;
}
