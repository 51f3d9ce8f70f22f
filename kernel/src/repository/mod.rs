pub mod event;
pub mod request;
pub mod user;
pub mod zone;
