use std::sync::Arc;

use adapter::repository::event::EventRepositoryImpl;
use adapter::repository::request::RequestRepositoryImpl;
use adapter::repository::user::UserRepositoryImpl;
use adapter::zone::BundledZoneDatabase;
use kernel::repository::event::EventRepository;
use kernel::repository::request::RequestRepository;
use kernel::repository::user::UserRepository;
use kernel::repository::zone::ZoneDatabase;
use shared::config::AppConfig;
use shared::error::AppResult;

#[derive(Clone)]
pub struct AppRegistry {
    user_repository: Arc<dyn UserRepository>,
    event_repository: Arc<dyn EventRepository>,
    request_repository: Arc<dyn RequestRepository>,
    zone_database: Arc<dyn ZoneDatabase>,
}

impl AppRegistry {
    pub fn new(app_config: AppConfig) -> AppResult<Self> {
        let user_repository = Arc::new(UserRepositoryImpl::new());
        let event_repository = Arc::new(EventRepositoryImpl::new());
        let request_repository = Arc::new(RequestRepositoryImpl::new());
        let zone_database = Arc::new(BundledZoneDatabase::new(&app_config)?);
        Ok(Self {
            user_repository,
            event_repository,
            request_repository,
            zone_database,
        })
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn event_repository(&self) -> Arc<dyn EventRepository> {
        self.event_repository.clone()
    }

    pub fn request_repository(&self) -> Arc<dyn RequestRepository> {
        self.request_repository.clone()
    }

    pub fn zone_database(&self) -> Arc<dyn ZoneDatabase> {
        self.zone_database.clone()
    }
}
