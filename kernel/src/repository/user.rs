use crate::model::{
    id::UserId,
    user::{
        event::{RegisterUser, UpdateHomeZone},
        User,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, event: RegisterUser) -> AppResult<User>;
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>>;
    async fn find_all(&self) -> AppResult<Vec<User>>;
    async fn update_home_zone(&self, event: UpdateHomeZone) -> AppResult<()>;
}
