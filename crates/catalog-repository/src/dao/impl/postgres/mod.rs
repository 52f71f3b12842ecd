//! PostgreSQL DAO implementations (SQLx, runtime-checked queries).
//!
//! Expected schema:
//!
//! ```sql
//! CREATE TABLE product_category (
//!     id   SERIAL PRIMARY KEY,
//!     name VARCHAR(255) NOT NULL
//! );
//!
//! CREATE TABLE product (
//!     id          BIGSERIAL PRIMARY KEY,
//!     name        VARCHAR(255) NOT NULL,
//!     description TEXT NOT NULL DEFAULT '',
//!     price       DOUBLE PRECISION NOT NULL,
//!     stock       INTEGER NOT NULL,
//!     category_id INTEGER NOT NULL REFERENCES product_category (id)
//! );
//! ```

mod product_category_dao_impl;
mod product_dao_impl;

pub use product_category_dao_impl::PgProductCategoryDao;
pub use product_dao_impl::PgProductDao;
