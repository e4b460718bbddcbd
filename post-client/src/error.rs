use thiserror::Error;

#[derive(Debug, Error)]
pub enum PostClientError {
    // HTTP ошибки
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Бизнес-логика ошибки
    #[error("Resource not found")]
    NotFound,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    // Транспортные ошибки
    #[error("Transport error: {0}")]
    Transport(String),
}

impl PostClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, PostClientError::NotFound)
    }

    pub fn is_invalid_request(&self) -> bool {
        matches!(self, PostClientError::InvalidRequest(_))
    }
}
