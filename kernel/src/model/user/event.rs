use crate::model::id::{TimeZoneId, UserId};
use derive_new::new;

#[derive(Debug, new)]
pub struct RegisterUser {
    pub first_name: String,
    pub last_name: String,
    pub home_zone: TimeZoneId,
    pub default_response: String,
    pub is_admin: bool,
}

#[derive(Debug, new)]
pub struct UpdateHomeZone {
    pub user_id: UserId,
    pub home_zone: TimeZoneId,
}
