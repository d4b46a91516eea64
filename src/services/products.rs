//! Service assembling the product catalog payload.

use crate::dto::products::CatalogResponse;
use crate::repository::ProductReader;
use crate::services::ServiceResult;

/// Loads the product count and the full product list.
///
/// The two reads are independent; `count` is not checked against
/// `products.len()` and may differ when the table changes in between.
pub fn load_catalog<R>(repo: &R) -> ServiceResult<CatalogResponse>
where
    R: ProductReader + ?Sized,
{
    let count = repo.count_products()?;
    let products = repo.list_products()?;

    Ok(CatalogResponse { count, products })
}
