//! # Catalog Service
//!
//! Application logic for products and product categories: request
//! validation, partial-update merging, and not-found mapping on top of the
//! read-through repositories.

pub mod dto;
pub mod r#impl;
pub mod product_service;

pub use dto::*;
pub use product_service::*;
pub use r#impl::{ProductServiceImpl, ProductServiceImplParameters};
