use thiserror::Error;

#[derive(Error, Debug)]
pub enum TourError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Slot no longer available: {0}")]
    SlotUnavailable(String),

    #[error("Backend error: {0}")]
    Api(#[from] eyre::Report),

    #[error("Internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type TourResult<T> = Result<T, TourError>;
