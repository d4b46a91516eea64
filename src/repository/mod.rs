use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::product::Product,
    repository::errors::RepositoryResult,
};

pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod product;

/// Diesel-backed repository sharing one connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Checks a connection out of the pool for a single query.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

/// Read access to the product catalog.
pub trait ProductReader {
    /// Total number of rows in the `product` table.
    fn count_products(&self) -> RepositoryResult<i64>;
    /// Every row of the `product` table in backend order.
    fn list_products(&self) -> RepositoryResult<Vec<Product>>;
}
