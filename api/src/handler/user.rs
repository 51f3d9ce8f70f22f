use crate::model::user::{RegisterUserRequest, UpdateUserLocationRequest, UserResponse};
use garde::Validate;
use kernel::model::{
    id::UserId,
    user::event::{RegisterUser, UpdateHomeZone},
};
use kernel::time::resolve::resolve_zone;
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn register_user(
    registry: &AppRegistry,
    req: RegisterUserRequest,
) -> AppResult<UserResponse> {
    req.validate(&())?;

    let home_zone = resolve_zone(registry.zone_database().as_ref(), &req.location)?;

    registry
        .user_repository()
        .create(RegisterUser::new(
            req.first_name,
            req.last_name,
            home_zone,
            req.default_response,
            req.is_admin,
        ))
        .await
        .map(UserResponse::from)
}

pub async fn update_user_location(
    registry: &AppRegistry,
    user_id: UserId,
    req: UpdateUserLocationRequest,
) -> AppResult<()> {
    req.validate(&())?;

    // Resolve first: a location that matches nothing must leave the
    // user's zone untouched.
    let home_zone = resolve_zone(registry.zone_database().as_ref(), &req.location)?;

    registry
        .user_repository()
        .update_home_zone(UpdateHomeZone::new(user_id, home_zone))
        .await
}
