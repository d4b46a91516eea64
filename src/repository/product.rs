//! Repository implementation for the product catalog.

use diesel::prelude::*;

use crate::{
    domain::product::Product,
    models::product::Product as DbProduct,
    repository::{DieselRepository, ProductReader, errors::RepositoryResult},
};

impl ProductReader for DieselRepository {
    fn count_products(&self) -> RepositoryResult<i64> {
        use crate::schema::product;

        let mut conn = self.conn()?;
        let total = product::table.count().get_result::<i64>(&mut conn)?;

        Ok(total)
    }

    fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        let mut conn = self.conn()?;
        // Columns are resolved by name after the query, so a table missing
        // one of them fails while mapping rather than in SQLite.
        let rows = diesel::sql_query("SELECT * FROM product").load::<DbProduct>(&mut conn)?;

        Ok(rows.into_iter().map(Product::from).collect())
    }
}
