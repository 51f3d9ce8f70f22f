use async_trait::async_trait;
use kernel::model::{
    id::UserId,
    user::{
        event::{RegisterUser, UpdateHomeZone},
        User,
    },
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};
use tokio::sync::RwLock;

/// Append-only in-memory registry. The id of a user is its insertion
/// index, so ids are sequential and never reused.
#[derive(Default)]
pub struct UserRepositoryImpl {
    rows: RwLock<Vec<User>>,
}

impl UserRepositoryImpl {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: RegisterUser) -> AppResult<User> {
        let mut rows = self.rows.write().await;
        let user = User {
            user_id: UserId::new(rows.len() as u64),
            first_name: event.first_name,
            last_name: event.last_name,
            home_zone: event.home_zone,
            default_response: event.default_response,
            is_admin: event.is_admin,
        };
        rows.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|u| u.user_id == user_id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.rows.read().await.clone())
    }

    async fn update_home_zone(&self, event: UpdateHomeZone) -> AppResult<()> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|u| u.user_id == event.user_id) {
            Some(user) => {
                user.home_zone = event.home_zone;
                Ok(())
            }
            None => Err(AppError::EntityNotFound(format!(
                "user ({}) was not found",
                event.user_id
            ))),
        }
    }
}
