//! Product service trait definition.

use crate::dto::{
    CreateProductCategoryRequest, CreateProductRequest, ProductCategoryResponse, ProductResponse,
    UpdateProductCategoryRequest, UpdateProductRequest,
};
use async_trait::async_trait;
use catalog_core::{CatalogResult, Interface, ProductCategoryId, ProductId};

/// Product and product category use cases.
#[async_trait]
pub trait ProductService: Interface + Send + Sync {
    /// Gets a product by ID. `NotFound` if it does not exist.
    async fn get_product(&self, id: ProductId) -> CatalogResult<ProductResponse>;

    /// Gets a product category by ID. `NotFound` if it does not exist.
    async fn get_product_category(
        &self,
        id: ProductCategoryId,
    ) -> CatalogResult<ProductCategoryResponse>;

    /// Creates a product and returns its ID.
    async fn create_product(&self, request: CreateProductRequest) -> CatalogResult<ProductId>;

    /// Creates a product category and returns its ID.
    async fn create_product_category(
        &self,
        request: CreateProductCategoryRequest,
    ) -> CatalogResult<ProductCategoryId>;

    /// Applies the provided fields to an existing product.
    async fn edit_product(
        &self,
        id: ProductId,
        request: UpdateProductRequest,
    ) -> CatalogResult<ProductResponse>;

    /// Applies the provided fields to an existing product category.
    async fn edit_product_category(
        &self,
        id: ProductCategoryId,
        request: UpdateProductCategoryRequest,
    ) -> CatalogResult<ProductCategoryResponse>;

    /// Deletes a product. `NotFound` if it does not exist.
    async fn delete_product(&self, id: ProductId) -> CatalogResult<()>;

    /// Deletes a product category. `NotFound` if it does not exist.
    async fn delete_product_category(&self, id: ProductCategoryId) -> CatalogResult<()>;
}
