//! Product service implementation.

use crate::dto::{
    CreateProductCategoryRequest, CreateProductRequest, ProductCategoryResponse, ProductResponse,
    UpdateProductCategoryRequest, UpdateProductRequest,
};
use crate::product_service::ProductService;
use async_trait::async_trait;
use catalog_core::{
    require_not_blank, CatalogError, CatalogResult, Entity, Product, ProductCategory,
    ProductCategoryId, ProductId, ValidateExt,
};
use catalog_repository::{ProductCategoryRepository, ProductRepository};
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

/// Product service backed by the product and category repositories.
#[derive(Component)]
#[shaku(interface = ProductService)]
pub struct ProductServiceImpl {
    #[shaku(inject)]
    product_repository: Arc<dyn ProductRepository>,
    #[shaku(inject)]
    category_repository: Arc<dyn ProductCategoryRepository>,
}

impl ProductServiceImpl {
    #[must_use]
    pub fn new(
        product_repository: Arc<dyn ProductRepository>,
        category_repository: Arc<dyn ProductCategoryRepository>,
    ) -> Self {
        Self {
            product_repository,
            category_repository,
        }
    }

    async fn load_product(&self, id: ProductId) -> CatalogResult<Product> {
        self.product_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::not_found(Product::NAME, id))
    }

    async fn load_category(&self, id: ProductCategoryId) -> CatalogResult<ProductCategory> {
        self.category_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::not_found(ProductCategory::NAME, id))
    }
}

#[async_trait]
impl ProductService for ProductServiceImpl {
    async fn get_product(&self, id: ProductId) -> CatalogResult<ProductResponse> {
        debug!("Getting product: {}", id);
        self.load_product(id).await.map(ProductResponse::from)
    }

    async fn get_product_category(
        &self,
        id: ProductCategoryId,
    ) -> CatalogResult<ProductCategoryResponse> {
        debug!("Getting product category: {}", id);
        self.load_category(id).await.map(ProductCategoryResponse::from)
    }

    async fn create_product(&self, request: CreateProductRequest) -> CatalogResult<ProductId> {
        debug!("Creating product: {}", request.name);

        request.validate_request()?;
        require_not_blank("name", &request.name)?;

        let product = Product::new(
            request.name,
            request.description,
            request.price,
            request.stock,
            request.category_id.into(),
        );
        let id = self.product_repository.insert(&product).await?;

        info!("Product created: {}", id);
        Ok(id)
    }

    async fn create_product_category(
        &self,
        request: CreateProductCategoryRequest,
    ) -> CatalogResult<ProductCategoryId> {
        debug!("Creating product category: {}", request.name);

        request.validate_request()?;
        require_not_blank("name", &request.name)?;

        let id = self
            .category_repository
            .insert(&ProductCategory::new(request.name))
            .await?;

        info!("Product category created: {}", id);
        Ok(id)
    }

    async fn edit_product(
        &self,
        id: ProductId,
        request: UpdateProductRequest,
    ) -> CatalogResult<ProductResponse> {
        debug!("Editing product: {}", id);

        request.validate_request()?;
        if let Some(name) = &request.name {
            require_not_blank("name", name)?;
        }

        let mut product = self.load_product(id).await?;
        if request.is_empty() {
            return Ok(ProductResponse::from(product));
        }
        request.apply_to(&mut product);

        let updated = self.product_repository.update(&product).await?;

        info!("Product updated: {}", id);
        Ok(ProductResponse::from(updated))
    }

    async fn edit_product_category(
        &self,
        id: ProductCategoryId,
        request: UpdateProductCategoryRequest,
    ) -> CatalogResult<ProductCategoryResponse> {
        debug!("Editing product category: {}", id);

        request.validate_request()?;
        if let Some(name) = &request.name {
            require_not_blank("name", name)?;
        }

        let mut category = self.load_category(id).await?;
        if request.is_empty() {
            return Ok(ProductCategoryResponse::from(category));
        }
        request.apply_to(&mut category);

        let updated = self.category_repository.update(&category).await?;

        info!("Product category updated: {}", id);
        Ok(ProductCategoryResponse::from(updated))
    }

    async fn delete_product(&self, id: ProductId) -> CatalogResult<()> {
        debug!("Deleting product: {}", id);

        if !self.product_repository.delete(id).await? {
            return Err(CatalogError::not_found(Product::NAME, id));
        }

        info!("Product deleted: {}", id);
        Ok(())
    }

    async fn delete_product_category(&self, id: ProductCategoryId) -> CatalogResult<()> {
        debug!("Deleting product category: {}", id);

        if !self.category_repository.delete(id).await? {
            return Err(CatalogError::not_found(ProductCategory::NAME, id));
        }

        info!("Product category deleted: {}", id);
        Ok(())
    }
}

impl std::fmt::Debug for ProductServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductServiceImpl").finish_non_exhaustive()
    }
}
