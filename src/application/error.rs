use thiserror::Error;

use crate::infra::error::InfraError;
use crate::infra::notion::UpstreamError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("post not found")]
    NotFound,
    #[error(transparent)]
    Upstream(UpstreamError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }

    /// Whether the route layer may degrade this failure to fallback data.
    pub fn is_upstream(&self) -> bool {
        matches!(self, AppError::Upstream(_))
    }
}

impl From<UpstreamError> for AppError {
    fn from(error: UpstreamError) -> Self {
        match error {
            UpstreamError::NotFound => AppError::NotFound,
            other => AppError::Upstream(other),
        }
    }
}
