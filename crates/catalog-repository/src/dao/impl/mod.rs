//! DAO implementations, organized by technology.

pub mod postgres;

pub use postgres::{PgProductCategoryDao, PgProductDao};
