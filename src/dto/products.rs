//! DTOs exposed by the `/products` endpoint.

use serde::Serialize;

use crate::domain::product::Product;

/// Result payload returned by [`crate::services::products::load_catalog`].
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    /// Number of rows in the product table, counted separately from `products`.
    pub count: i64,
    /// Every product in backend order.
    pub products: Vec<Product>,
}
