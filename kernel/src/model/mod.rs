pub mod event;
pub mod id;
pub mod request;
pub mod user;
