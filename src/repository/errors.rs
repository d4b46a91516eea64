use diesel::r2d2::{Error as R2D2Error, PoolError};
use diesel::result::Error as DieselError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The backend could not be reached or rejected the statement.
    #[error("Query error: {0}")]
    Query(String),

    /// A returned row could not be converted into a product.
    #[error("Mapping error: {0}")]
    Mapping(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::DeserializationError(e) => RepositoryError::Mapping(e.to_string()),
            DieselError::DatabaseError(_, info) => {
                RepositoryError::Query(info.message().to_string())
            }
            _ => RepositoryError::Query(err.to_string()),
        }
    }
}

impl From<R2D2Error> for RepositoryError {
    fn from(err: R2D2Error) -> Self {
        RepositoryError::Query(format!("Connection error: {err}"))
    }
}

impl From<PoolError> for RepositoryError {
    fn from(err: PoolError) -> Self {
        RepositoryError::Query(format!("Connection error: {err}"))
    }
}
