use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("No data provided")]
    InvalidPayload,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Post with id {0} not found")]
    PostNotFound(i64),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn to_status_code(&self) -> u16 {
        match self {
            Self::InvalidPayload | Self::MissingField(_) => 400,
            Self::PostNotFound(_) => 404,
            Self::Internal(_) => 500,
        }
    }
}
