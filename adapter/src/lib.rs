pub mod repository;
pub mod zone;
