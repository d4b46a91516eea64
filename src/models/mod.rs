//! Diesel models and external configuration.

#[cfg(feature = "server")]
pub mod config;
pub mod product;
