//! Product controller.

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
use catalog_core::{CatalogError, ErrorResponse, ProductId};
use catalog_service::{
    CreatedResponse, MessageResponse, ProductCommand, ProductManagementRequest, ProductResponse,
};
use tracing::debug;

/// Creates the product router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/product", post(manage_product))
        .route("/v1/product/:id", get(get_product))
}

/// Get a product by ID.
#[utoipa::path(
    get,
    path = "/v1/product/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 400, description = "Invalid product ID", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ProductResponse> {
    debug!("Get product request: {}", id);

    let product_id = parse_product_id(&id)?;
    let response = state.product_service.get_product(product_id).await?;
    ok(response)
}

/// Add, edit or delete a product.
#[utoipa::path(
    post,
    path = "/v1/product",
    tag = "products",
    request_body = ProductManagementRequest,
    responses(
        (status = 201, description = "Product created", body = CreatedResponse),
        (status = 200, description = "Product edited or deleted"),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn manage_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductManagementRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!("Rejected product management body: {}", rejection);
        CatalogError::validation("Invalid Input")
    })?;
    debug!(action = %request.action, id = request.id, "Product management request");

    match request.into_command()? {
        ProductCommand::Add(create) => {
            let id = state.product_service.create_product(create).await?;
            let body = CreatedResponse {
                id: id.into_inner(),
                message: format!("Successfully created product {}", id),
            };
            Ok(created(body).into_response())
        }
        ProductCommand::Edit(id, changes) => {
            let product = state.product_service.edit_product(id, changes).await?;
            Ok(Json(ApiResponse::success(product)).into_response())
        }
        ProductCommand::Delete(id) => {
            state.product_service.delete_product(id).await?;
            let body = MessageResponse::new(format!("Product {} successfully deleted", id));
            Ok(Json(ApiResponse::success(body)).into_response())
        }
    }
}

fn parse_product_id(id: &str) -> Result<ProductId, AppError> {
    id.parse()
        .map_err(|_| AppError(CatalogError::Validation(format!("Invalid product ID: {}", id))))
}
