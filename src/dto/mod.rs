//! DTO modules that bridge services with the HTTP API.

pub mod products;
