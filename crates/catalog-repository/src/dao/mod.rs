//! DAO (Data Access Object) layer.
//!
//! DAOs provide low-level, single-source data access. They know nothing
//! about caching; the repositories in [`crate::r#impl`] coordinate a DAO
//! with a cache.

pub mod product_category_dao;
pub mod product_dao;
pub mod r#impl;

pub use product_category_dao::ProductCategoryDao;
pub use product_dao::ProductDao;
pub use r#impl::{PgProductCategoryDao, PgProductDao};
