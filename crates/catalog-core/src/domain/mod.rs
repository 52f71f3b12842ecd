//! Catalog domain entities.

pub mod product;
pub mod product_category;

pub use product::Product;
pub use product_category::ProductCategory;
