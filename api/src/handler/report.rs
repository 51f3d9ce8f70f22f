use crate::model::report::AdminRequestRow;
use kernel::model::id::UserId;
use kernel::time::{civil::CivilInstant, convert::to_display};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

/// Text digest of every request the viewer is a party to. Requests the
/// viewer made go into the "mine" section, requests against the viewer's
/// own events into the "theirs" section; instants are shown in the
/// viewer's home zone, laid out under the current environment zone.
pub async fn personal_digest(registry: &AppRegistry, viewer_id: UserId) -> AppResult<String> {
    let viewer = registry
        .user_repository()
        .find_by_id(viewer_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound(format!("user ({viewer_id}) was not found")))?;

    let render_zone = registry.zone_database().current_environment_zone();

    let mut mine =
        String::from("\tMy requests that are waiting to be approved by someone else:\n");
    let mut theirs =
        String::from("\tRequests by other people that are waiting for me to accept/reject them:\n");

    for request in registry.request_repository().find_all().await? {
        let event = registry
            .event_repository()
            .find_by_id(request.event_id)
            .await?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("event ({}) was not found", request.event_id))
            })?;
        let owner = registry
            .user_repository()
            .find_by_id(event.owned_by)
            .await?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("user ({}) was not found", event.owned_by))
            })?;

        let instant = to_display(event.stored_instant, &viewer.home_zone, &render_zone)?;

        if request.requested_by == viewer.user_id {
            mine.push_str(&format!(
                "\t\t\"{}\" by {} at {} is {}: {}\n",
                event.title,
                owner.full_name(),
                instant,
                request.status,
                request.requestee_comment,
            ));
        } else if owner.user_id == viewer.user_id {
            let attendee = registry
                .user_repository()
                .find_by_id(request.requested_by)
                .await?
                .ok_or_else(|| {
                    AppError::EntityNotFound(format!(
                        "user ({}) was not found",
                        request.requested_by
                    ))
                })?;
            theirs.push_str(&format!(
                "\t\t[{}] {} for \"{}\" at {} says \"{}\"\n",
                request.status,
                attendee.full_name(),
                event.title,
                instant,
                request.requestor_comment,
            ));
        }
    }

    Ok(format!(
        "Calendar of {}:\n{mine}{theirs}",
        viewer.full_name()
    ))
}

/// One row per request, admin only. The stored instant is rendered in
/// each party's home zone (under the environment zone) and once more as
/// raw UTC.
pub async fn administer_requests(
    registry: &AppRegistry,
    viewer_id: UserId,
) -> AppResult<Vec<AdminRequestRow>> {
    let viewer = registry
        .user_repository()
        .find_by_id(viewer_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound(format!("user ({viewer_id}) was not found")))?;

    if !viewer.is_admin {
        return Err(AppError::NotAdmin);
    }

    let render_zone = registry.zone_database().current_environment_zone();

    let mut rows = Vec::new();
    for request in registry.request_repository().find_all().await? {
        let requestor = registry
            .user_repository()
            .find_by_id(request.requested_by)
            .await?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("user ({}) was not found", request.requested_by))
            })?;
        let event = registry
            .event_repository()
            .find_by_id(request.event_id)
            .await?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("event ({}) was not found", request.event_id))
            })?;
        let requestee = registry
            .user_repository()
            .find_by_id(event.owned_by)
            .await?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("user ({}) was not found", event.owned_by))
            })?;

        let requestor_zone_instant =
            to_display(event.stored_instant, &requestor.home_zone, &render_zone)?;
        let requestee_zone_instant =
            to_display(event.stored_instant, &requestee.home_zone, &render_zone)?;

        rows.push(AdminRequestRow {
            requestor_name: requestor.full_name(),
            requestor_zone_instant: requestor_zone_instant.to_string(),
            requestee_name: requestee.full_name(),
            requestee_zone_instant: requestee_zone_instant.to_string(),
            stored_instant: CivilInstant::from_zoned(&event.stored_instant).to_string(),
            status: request.status,
        });
    }

    Ok(rows)
}
