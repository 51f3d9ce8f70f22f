use async_trait::async_trait;
use kernel::model::{
    event::{event::CreateEvent, Event},
    id::EventId,
};
use kernel::repository::event::EventRepository;
use shared::error::AppResult;
use tokio::sync::RwLock;

/// Append-only; events are immutable once created, so there is no update
/// path here at all.
#[derive(Default)]
pub struct EventRepositoryImpl {
    rows: RwLock<Vec<Event>>,
}

impl EventRepositoryImpl {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventRepository for EventRepositoryImpl {
    async fn create(&self, event: CreateEvent) -> AppResult<Event> {
        let mut rows = self.rows.write().await;
        let row = Event {
            event_id: EventId::new(rows.len() as u64),
            owned_by: event.owned_by,
            title: event.title,
            stored_instant: event.stored_instant,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, event_id: EventId) -> AppResult<Option<Event>> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|e| e.event_id == event_id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Event>> {
        Ok(self.rows.read().await.clone())
    }
}
