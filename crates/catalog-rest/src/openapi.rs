//! OpenAPI documentation for the REST API.

use crate::controllers::health_controller::HealthResponse;
use catalog_core::{ErrorResponse, FieldError};
use catalog_service::{
    CreatedResponse, ManagementAction, MessageResponse, ProductCategoryManagementRequest,
    ProductCategoryResponse, ProductManagementRequest, ProductResponse,
};
use utoipa::OpenApi;

/// OpenAPI document served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product Catalog API",
        version = "1.0.0",
        description = "Products and product categories with a read-through cache",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        crate::controllers::product_controller::get_product,
        crate::controllers::product_controller::manage_product,
        crate::controllers::product_category_controller::get_product_category,
        crate::controllers::product_category_controller::manage_product_category,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            ErrorResponse,
            FieldError,
            HealthResponse,
            ManagementAction,
            ProductManagementRequest,
            ProductCategoryManagementRequest,
            ProductResponse,
            ProductCategoryResponse,
            CreatedResponse,
            MessageResponse,
        )
    ),
    tags(
        (name = "products", description = "Product endpoints"),
        (name = "product categories", description = "Product category endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/v1/product",
            "/v1/product/{id}",
            "/v1/product_category",
            "/v1/product_category/{id}",
            "/health",
            "/ready",
            "/live",
        ] {
            assert!(paths.contains(&expected), "missing {}", expected);
        }
    }
}
