use garde::Validate;
use kernel::model::{
    id::{TimeZoneId, UserId},
    user::User,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    #[garde(length(min = 1))]
    pub first_name: String,
    #[garde(length(min = 1))]
    pub last_name: String,
    /// Free-text location; resolved against the zone database, never
    /// stored itself.
    #[garde(length(min = 1))]
    pub location: String,
    #[garde(skip)]
    #[serde(default)]
    pub default_response: String,
    #[garde(skip)]
    #[serde(default)]
    pub is_admin: bool,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserLocationRequest {
    #[garde(length(min = 1))]
    pub location: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub home_zone: TimeZoneId,
    pub default_response: String,
    pub is_admin: bool,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            first_name,
            last_name,
            home_zone,
            default_response,
            is_admin,
        } = value;
        Self {
            id: user_id,
            first_name,
            last_name,
            home_zone,
            default_response,
            is_admin,
        }
    }
}
