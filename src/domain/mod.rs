//! Domain entities exposed by the catalog.

pub mod product;
