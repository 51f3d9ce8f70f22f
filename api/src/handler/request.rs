use crate::model::request::{ApproveRequestRequest, MakeRequestRequest, RequestResponse};
use garde::Validate;
use kernel::model::{
    id::{RequestId, UserId},
    request::event::{ApproveRequest, CreateRequest},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn make_request(
    registry: &AppRegistry,
    requestor_id: UserId,
    req: MakeRequestRequest,
) -> AppResult<RequestResponse> {
    req.validate(&())?;

    let requestor = registry
        .user_repository()
        .find_by_id(requestor_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound(format!("user ({requestor_id}) was not found")))?;

    let event = registry
        .event_repository()
        .find_by_id(req.event_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound(format!("event ({}) was not found", req.event_id)))?;

    let owner = registry
        .user_repository()
        .find_by_id(event.owned_by)
        .await?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("user ({}) was not found", event.owned_by))
        })?;

    registry
        .request_repository()
        .create(CreateRequest::new(
            requestor.user_id,
            event.event_id,
            req.comment,
            owner.default_response,
        ))
        .await
        .map(RequestResponse::from)
}

pub async fn approve_request(
    registry: &AppRegistry,
    acting_user_id: UserId,
    request_id: RequestId,
    req: ApproveRequestRequest,
) -> AppResult<()> {
    req.validate(&())?;

    let request = registry
        .request_repository()
        .find_by_id(request_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound(format!("request ({request_id}) was not found")))?;

    let event = registry
        .event_repository()
        .find_by_id(request.event_id)
        .await?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("event ({}) was not found", request.event_id))
        })?;

    // The guard runs before any mutation; a failed approval leaves both
    // status and comment exactly as they were.
    if acting_user_id != event.owned_by {
        return Err(AppError::NotOwner);
    }

    registry
        .request_repository()
        .approve(ApproveRequest::new(request.request_id, req.comment))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::event::create_event;
    use crate::handler::user::register_user;
    use crate::model::event::CreateEventRequest;
    use crate::model::user::RegisterUserRequest;
    use chrono::NaiveDate;
    use kernel::model::request::RequestStatus;
    use shared::config::{AppConfig, ZoneConfig};

    fn test_registry() -> AppRegistry {
        let config = AppConfig {
            zone: ZoneConfig {
                environment_zone_override: Some("Pacific/Honolulu".into()),
            },
        };
        AppRegistry::new(config).unwrap()
    }

    fn register(first: &str, last: &str, location: &str, response: &str) -> RegisterUserRequest {
        RegisterUserRequest {
            first_name: first.into(),
            last_name: last.into(),
            location: location.into(),
            default_response: response.into(),
            is_admin: false,
        }
    }

    async fn seeded() -> anyhow::Result<(AppRegistry, UserId, UserId, RequestId)> {
        let registry = test_registry();
        let ben = register_user(
            &registry,
            register("Ben", "Miller", "Honolulu", "I'll get back to you ASAP"),
        )
        .await?;
        let jane = register_user(
            &registry,
            register("Jane", "Dorothy", "Buenos Aires", "Will respond when I can"),
        )
        .await?;

        let event = create_event(
            &registry,
            ben.id,
            CreateEventRequest {
                title: "My New Book".into(),
                civil_instant: NaiveDate::from_ymd_opt(2025, 6, 5)
                    .unwrap()
                    .and_hms_opt(15, 0, 0)
                    .unwrap(),
            },
        )
        .await?;

        let request = make_request(
            &registry,
            jane.id,
            MakeRequestRequest {
                event_id: event.id,
                comment: "I'd like to attend!".into(),
            },
        )
        .await?;

        Ok((registry, ben.id, jane.id, request.id))
    }

    #[tokio::test]
    async fn request_seeds_response_from_owner_default() -> anyhow::Result<()> {
        let (registry, _, _, request_id) = seeded().await?;
        let request = registry
            .request_repository()
            .find_by_id(request_id)
            .await?
            .unwrap();
        assert_eq!(request.status, RequestStatus::Pending);
        assert_eq!(request.requestee_comment, "I'll get back to you ASAP");
        Ok(())
    }

    #[tokio::test]
    async fn only_the_event_owner_can_approve() -> anyhow::Result<()> {
        let (registry, _, jane_id, request_id) = seeded().await?;

        let res = approve_request(
            &registry,
            jane_id,
            request_id,
            ApproveRequestRequest {
                comment: "approving my own request".into(),
            },
        )
        .await;
        assert!(matches!(res, Err(AppError::NotOwner)));

        // Nothing changed on the failure path.
        let request = registry
            .request_repository()
            .find_by_id(request_id)
            .await?
            .unwrap();
        assert_eq!(request.status, RequestStatus::Pending);
        assert_eq!(request.requestee_comment, "I'll get back to you ASAP");
        Ok(())
    }

    #[tokio::test]
    async fn approval_is_monotonic() -> anyhow::Result<()> {
        let (registry, ben_id, jane_id, request_id) = seeded().await?;

        approve_request(
            &registry,
            ben_id,
            request_id,
            ApproveRequestRequest {
                comment: "Okay!".into(),
            },
        )
        .await?;

        let request = registry
            .request_repository()
            .find_by_id(request_id)
            .await?
            .unwrap();
        assert_eq!(request.status, RequestStatus::Approved);
        assert_eq!(request.requestee_comment, "Okay!");

        // A later failed attempt cannot knock it back to pending.
        let res = approve_request(
            &registry,
            jane_id,
            request_id,
            ApproveRequestRequest {
                comment: "undo".into(),
            },
        )
        .await;
        assert!(matches!(res, Err(AppError::NotOwner)));

        let request = registry
            .request_repository()
            .find_by_id(request_id)
            .await?
            .unwrap();
        assert_eq!(request.status, RequestStatus::Approved);
        assert_eq!(request.requestee_comment, "Okay!");
        Ok(())
    }

    #[tokio::test]
    async fn requesting_a_missing_event_fails() -> anyhow::Result<()> {
        let (registry, _, jane_id, _) = seeded().await?;
        let res = make_request(
            &registry,
            jane_id,
            MakeRequestRequest {
                event_id: kernel::model::id::EventId::new(99),
                comment: "Can I go?".into(),
            },
        )
        .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
        Ok(())
    }
}
