//! Data Transfer Objects (DTOs).

mod management_dto;
mod product_category_dto;
mod product_dto;

pub use management_dto::*;
pub use product_category_dto::*;
pub use product_dto::*;
