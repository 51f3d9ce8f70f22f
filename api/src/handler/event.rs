use crate::model::event::{CreateEventRequest, EventResponse};
use garde::Validate;
use kernel::model::{event::event::CreateEvent, id::UserId};
use kernel::time::convert::to_storage;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn create_event(
    registry: &AppRegistry,
    owner_id: UserId,
    req: CreateEventRequest,
) -> AppResult<EventResponse> {
    req.validate(&())?;

    let owner = registry
        .user_repository()
        .find_by_id(owner_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound(format!("user ({owner_id}) was not found")))?;

    // The fields were typed in the creator's environment zone but mean
    // wall-clock time in the owner's home zone.
    let entered_in = registry.zone_database().current_environment_zone();
    let stored_instant = to_storage(req.civil_instant, &owner.home_zone, &entered_in)?;

    registry
        .event_repository()
        .create(CreateEvent::new(owner.user_id, req.title, stored_instant))
        .await
        .map(EventResponse::from)
}
