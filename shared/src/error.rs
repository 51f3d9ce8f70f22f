use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    EntityNotFound(String),
    #[error("no time zone was found for \"{0}\"")]
    NoZoneFound(String),
    #[error("time zone \"{0}\" is not present in the zone database")]
    UnknownZone(String),
    #[error("cannot approve a request for an event you are not the owner of")]
    NotOwner,
    #[error("must be an admin to administer requests")]
    NotAdmin,
    #[error(transparent)]
    ValidationError(#[from] garde::Report),
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;
