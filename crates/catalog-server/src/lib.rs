//! # Catalog Server Library
//!
//! Dependency injection wiring and startup utilities for the product
//! catalog server.

pub mod di;
pub mod startup;
