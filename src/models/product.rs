//! Diesel model for rows of the `product` table.

use diesel::prelude::*;

use crate::domain::product::Product as DomainProduct;

#[derive(Debug, Clone, QueryableByName)]
#[diesel(table_name = crate::schema::product)]
/// Raw row of `SELECT * FROM product`, looked up by column name.
pub struct Product {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl From<Product> for DomainProduct {
    fn from(row: Product) -> Self {
        Self {
            id: row.id,
            name: row.name,
            price: row.price,
        }
    }
}
