use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod products;

/// Errors surfaced by the service layer. Repository failures pass through
/// untouched.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
