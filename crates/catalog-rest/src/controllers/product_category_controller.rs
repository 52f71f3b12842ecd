//! Product category controller.

use crate::{
    responses::{created, ok, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use catalog_core::{CatalogError, ErrorResponse, ProductCategoryId};
use catalog_service::{
    CreatedResponse, MessageResponse, ProductCategoryCommand, ProductCategoryManagementRequest,
    ProductCategoryResponse,
};
use tracing::debug;

/// Creates the product category router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/product_category", post(manage_product_category))
        .route("/v1/product_category/:id", get(get_product_category))
}

/// Get a product category by ID.
#[utoipa::path(
    get,
    path = "/v1/product_category/{id}",
    tag = "product categories",
    params(("id" = String, Path, description = "Product category ID")),
    responses(
        (status = 200, description = "Category found", body = ProductCategoryResponse),
        (status = 400, description = "Invalid category ID", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse)
    )
)]
pub async fn get_product_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ProductCategoryResponse> {
    debug!("Get product category request: {}", id);

    let category_id: ProductCategoryId = id.parse().map_err(|_| {
        AppError(CatalogError::Validation(format!("Invalid product category ID: {}", id)))
    })?;
    let response = state.product_service.get_product_category(category_id).await?;
    ok(response)
}

/// Add, edit or delete a product category.
#[utoipa::path(
    post,
    path = "/v1/product_category",
    tag = "product categories",
    request_body = ProductCategoryManagementRequest,
    responses(
        (status = 201, description = "Category created", body = CreatedResponse),
        (status = 200, description = "Category edited or deleted"),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse)
    )
)]
pub async fn manage_product_category(
    State(state): State<AppState>,
    payload: Result<Json<ProductCategoryManagementRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!("Rejected product category management body: {}", rejection);
        CatalogError::validation("Invalid Input")
    })?;
    debug!(action = %request.action, id = request.id, "Product category management request");

    let service = &state.product_service;
    match request.into_command()? {
        ProductCategoryCommand::Add(create) => {
            let id = service.create_product_category(create).await?;
            let body = CreatedResponse {
                id: i64::from(id.into_inner()),
                message: format!("Successfully created product category {}", id),
            };
            Ok(created(body).into_response())
        }
        ProductCategoryCommand::Edit(id, changes) => {
            let category = service.edit_product_category(id, changes).await?;
            Ok(Json(ApiResponse::success(category)).into_response())
        }
        ProductCategoryCommand::Delete(id) => {
            service.delete_product_category(id).await?;
            let body = MessageResponse::new(format!("Product category {} successfully deleted", id));
            Ok(Json(ApiResponse::success(body)).into_response())
        }
    }
}
