//! Repository layer implementations.
//!
//! Trait definitions live in the parent module (`traits.rs`). Both
//! repositories share the read-through logic in [`read_through`].

mod product_category_repository_impl;
mod product_repository_impl;
mod read_through;

pub use product_category_repository_impl::{
    ProductCategoryRepositoryImpl, ProductCategoryRepositoryImplParameters,
};
pub use product_repository_impl::{ProductRepositoryImpl, ProductRepositoryImplParameters};
