//! Main application router.

use crate::{
    controllers::{health_controller, product_category_controller, product_controller},
    middleware::logging_middleware,
    openapi::ApiDoc,
    state::AppState,
};
use axum::{middleware, Router};
use catalog_config::ServerConfig;
use catalog_repository::DatabasePoolInterface;
use catalog_service::ProductService;
use shaku::{HasComponent, Module};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Creates the application router, resolving its services from a shaku module.
pub fn create_router<M>(module: &M, server_config: &ServerConfig) -> Router
where
    M: Module + HasComponent<dyn ProductService> + HasComponent<dyn DatabasePoolInterface>,
{
    build_router(AppState::from_module(module), server_config)
}

/// Creates the application router around an existing state.
pub fn build_router(state: AppState, server_config: &ServerConfig) -> Router {
    let router = Router::new()
        .merge(health_controller::router())
        .merge(product_controller::router())
        .merge(product_category_controller::router())
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TimeoutLayer::new(server_config.request_timeout()))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware));

    info!("Router created with REST endpoints and Swagger UI at /swagger-ui");
    router
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ReadinessCheck;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use catalog_core::{
        CatalogError, CatalogResult, Product, ProductCategory, ProductCategoryId, ProductId,
    };
    use catalog_service::{
        CreateProductCategoryRequest, CreateProductRequest, ProductCategoryResponse,
        ProductResponse, UpdateProductCategoryRequest, UpdateProductRequest,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    #[derive(Default)]
    struct StubProductService {
        products: Mutex<HashMap<i64, Product>>,
        categories: Mutex<HashMap<i32, ProductCategory>>,
    }

    #[async_trait]
    impl ProductService for StubProductService {
        async fn get_product(&self, id: ProductId) -> CatalogResult<ProductResponse> {
            self.products
                .lock()
                .unwrap()
                .get(&id.into_inner())
                .cloned()
                .map(ProductResponse::from)
                .ok_or_else(|| CatalogError::not_found("Product", id))
        }

        async fn get_product_category(
            &self,
            id: ProductCategoryId,
        ) -> CatalogResult<ProductCategoryResponse> {
            self.categories
                .lock()
                .unwrap()
                .get(&id.into_inner())
                .cloned()
                .map(ProductCategoryResponse::from)
                .ok_or_else(|| CatalogError::not_found("ProductCategory", id))
        }

        async fn create_product(&self, request: CreateProductRequest) -> CatalogResult<ProductId> {
            let mut products = self.products.lock().unwrap();
            let id = ProductId::new(products.len() as i64 + 1);
            let product = Product::new(
                request.name,
                request.description,
                request.price,
                request.stock,
                ProductCategoryId::new(request.category_id),
            )
            .with_id(id);
            products.insert(id.into_inner(), product);
            Ok(id)
        }

        async fn create_product_category(
            &self,
            request: CreateProductCategoryRequest,
        ) -> CatalogResult<ProductCategoryId> {
            let mut categories = self.categories.lock().unwrap();
            let id = ProductCategoryId::new(categories.len() as i32 + 1);
            categories.insert(id.into_inner(), ProductCategory::new(request.name).with_id(id));
            Ok(id)
        }

        async fn edit_product(
            &self,
            id: ProductId,
            request: UpdateProductRequest,
        ) -> CatalogResult<ProductResponse> {
            let mut products = self.products.lock().unwrap();
            let product = products
                .get_mut(&id.into_inner())
                .ok_or_else(|| CatalogError::not_found("Product", id))?;
            request.apply_to(product);
            Ok(product.clone().into())
        }

        async fn edit_product_category(
            &self,
            id: ProductCategoryId,
            request: UpdateProductCategoryRequest,
        ) -> CatalogResult<ProductCategoryResponse> {
            let mut categories = self.categories.lock().unwrap();
            let category = categories
                .get_mut(&id.into_inner())
                .ok_or_else(|| CatalogError::not_found("ProductCategory", id))?;
            request.apply_to(category);
            Ok(category.clone().into())
        }

        async fn delete_product(&self, id: ProductId) -> CatalogResult<()> {
            self.products
                .lock()
                .unwrap()
                .remove(&id.into_inner())
                .map(|_| ())
                .ok_or_else(|| CatalogError::not_found("Product", id))
        }

        async fn delete_product_category(&self, id: ProductCategoryId) -> CatalogResult<()> {
            self.categories
                .lock()
                .unwrap()
                .remove(&id.into_inner())
                .map(|_| ())
                .ok_or_else(|| CatalogError::not_found("ProductCategory", id))
        }
    }

    struct StubReadiness(AtomicBool);

    #[async_trait]
    impl ReadinessCheck for StubReadiness {
        async fn check(&self) -> CatalogResult<()> {
            if self.0.load(Ordering::SeqCst) {
                Ok(())
            } else {
                Err(CatalogError::Database("connection refused".to_string()))
            }
        }
    }

    fn app_with_readiness(ready: bool) -> Router {
        let state = AppState::new(
            Arc::new(StubProductService::default()),
            Arc::new(StubReadiness(AtomicBool::new(ready))),
        );
        build_router(state, &ServerConfig::default())
    }

    fn app() -> Router {
        app_with_readiness(true)
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let app = app();
        let (status, body) = send(&app, get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");

        let (status, _) = send(&app, get("/live")).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, get("/ready")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
    }

    #[tokio::test]
    async fn test_ready_reports_unavailable_database() {
        let (status, body) = send(&app_with_readiness(false), get("/ready")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "unavailable");
    }

    #[tokio::test]
    async fn test_product_lifecycle() {
        let app = app();

        let add = json!({
            "action": "add",
            "name": "Widget",
            "description": "A widget",
            "price": 9.99,
            "stock": 5,
            "category_id": 1
        });
        let (status, body) = send(&app, post_json("/v1/product", &add)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        let id = body["data"]["id"].as_i64().unwrap();

        let (status, body) = send(&app, get(&format!("/v1/product/{}", id))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "Widget");
        assert_eq!(body["data"]["stock"], 5);

        let edit = json!({"action": "edit", "id": id, "name": "Widget-v2"});
        let (status, body) = send(&app, post_json("/v1/product", &edit)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "Widget-v2");
        assert_eq!(body["data"]["price"], 9.99);

        let (_, body) = send(&app, get(&format!("/v1/product/{}", id))).await;
        assert_eq!(body["data"]["name"], "Widget-v2");

        let delete = json!({"action": "delete", "id": id});
        let (status, body) = send(&app, post_json("/v1/product", &delete)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["data"]["message"].as_str().unwrap().contains("deleted"));

        let (status, body) = send(&app, get(&format!("/v1/product/{}", id))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_bad_request() {
        let app = app();
        for uri in ["/v1/product/abc", "/v1/product_category/1.5"] {
            let (status, body) = send(&app, get(uri)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        }
    }

    #[tokio::test]
    async fn test_management_envelope_rules() {
        let app = app();
        let cases = [
            json!({"name": "Widget"}),
            json!({"action": "", "name": "Widget"}),
            json!({"action": "purge", "id": 1}),
            json!({"action": "add", "id": 3, "name": "Widget", "price": 1.0, "category_id": 1}),
            json!({"action": "edit", "name": "Widget"}),
            json!({"action": "delete"}),
        ];
        for case in &cases {
            let (status, body) = send(&app, post_json("/v1/product", case)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", case);
            assert_eq!(body["success"], false);
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_input() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/v1/product_category")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(&app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"].as_str().unwrap().contains("Invalid Input"));
    }

    #[tokio::test]
    async fn test_category_lifecycle() {
        let app = app();

        let (status, body) = send(
            &app,
            post_json("/v1/product_category", &json!({"action": "add", "name": "Tools"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = body["data"]["id"].as_i64().unwrap();

        let (status, body) = send(&app, get(&format!("/v1/product_category/{}", id))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!({"id": id, "name": "Tools"}));

        let rename = json!({"action": "edit", "id": id, "name": "Hardware"});
        let (_, body) = send(&app, post_json("/v1/product_category", &rename)).await;
        assert_eq!(body["data"]["name"], "Hardware");

        let delete = json!({"action": "delete", "id": id});
        let (status, _) = send(&app, post_json("/v1/product_category", &delete)).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(&app, post_json("/v1/product_category", &delete)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let (status, body) = send(&app(), get("/api-docs/openapi.json")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/v1/product/{id}"].is_object());
    }
}
