use axum::{
    Router,
    extract::Path,
    extract::rejection::JsonRejection,
    response::Json,
    routing::get,
};
use tracing::instrument;

use mesa_service::establish_connection;
use mesa_service::store::product_types;

use crate::error::ApiError;
use crate::models::*;

pub fn router() -> Router {
    Router::new()
        .route(
            "/product-types",
            get(list_product_types).post(create_product_type),
        )
        .route(
            "/product-types/{id}",
            get(get_product_type)
                .put(update_product_type)
                .delete(delete_product_type),
        )
}

fn to_response(row: mesa_service::models::ProductType) -> ProductTypeResponse {
    ProductTypeResponse {
        product_type_id: row.product_type_id,
        type_name: row.type_name,
    }
}

#[utoipa::path(
    get,
    path = "/product-types",
    responses(
        (status = 200, description = "All product types", body = [ProductTypeResponse]),
        (status = 500, description = "Internal error", body = ApiErrorResponse),
    ),
    tag = "product-types"
)]
#[instrument]
pub async fn list_product_types() -> Result<Json<Vec<ProductTypeResponse>>, ApiError> {
    let conn = &mut establish_connection()?;
    let rows = product_types::list_product_types(conn)?;
    Ok(Json(rows.into_iter().map(to_response).collect()))
}

#[utoipa::path(
    get,
    path = "/product-types/{id}",
    responses(
        (status = 200, description = "The product type", body = ProductTypeResponse),
        (status = 404, description = "Product type not found", body = ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Product type ID")
    ),
    tag = "product-types"
)]
#[instrument]
pub async fn get_product_type(
    Path(type_id): Path<i32>,
) -> Result<Json<ProductTypeResponse>, ApiError> {
    let conn = &mut establish_connection()?;
    let row = product_types::get_product_type(conn, type_id)?;
    Ok(Json(to_response(row)))
}

#[utoipa::path(
    post,
    path = "/product-types",
    request_body = ProductTypeRequest,
    responses(
        (status = 200, description = "Product type created", body = MessageResponse),
        (status = 400, description = "Missing or empty name", body = ApiErrorResponse),
        (status = 409, description = "Name already in use", body = ApiErrorResponse),
    ),
    tag = "product-types"
)]
#[instrument]
pub async fn create_product_type(
    payload: Result<Json<ProductTypeRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(payload) = payload?;
    let name = payload
        .type_name
        .ok_or_else(|| ApiError::Validation("Product type name is required".into()))?;

    let conn = &mut establish_connection()?;
    let row = product_types::create_product_type(conn, &name)?;
    Ok(Json(MessageResponse {
        message: format!("Product type '{}' added", row.type_name),
    }))
}

#[utoipa::path(
    put,
    path = "/product-types/{id}",
    request_body = ProductTypeRequest,
    responses(
        (status = 200, description = "Product type renamed", body = MessageResponse),
        (status = 400, description = "Missing or empty name", body = ApiErrorResponse),
        (status = 404, description = "Product type not found", body = ApiErrorResponse),
        (status = 409, description = "Name already in use", body = ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Product type ID")
    ),
    tag = "product-types"
)]
#[instrument]
pub async fn update_product_type(
    Path(type_id): Path<i32>,
    payload: Result<Json<ProductTypeRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(payload) = payload?;
    let name = payload
        .type_name
        .ok_or_else(|| ApiError::Validation("Product type name is required".into()))?;

    let conn = &mut establish_connection()?;
    product_types::rename_product_type(conn, type_id, &name)?;
    Ok(Json(MessageResponse {
        message: format!("Product type {type_id} renamed to '{}'", name.trim()),
    }))
}

#[utoipa::path(
    delete,
    path = "/product-types/{id}",
    responses(
        (status = 200, description = "Product type deleted; referencing products detached", body = AffectedResponse),
        (status = 404, description = "Product type not found", body = ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Product type ID")
    ),
    tag = "product-types"
)]
#[instrument]
pub async fn delete_product_type(
    Path(type_id): Path<i32>,
) -> Result<Json<AffectedResponse>, ApiError> {
    let conn = &mut establish_connection()?;
    let detached = product_types::delete_product_type(conn, type_id)?;
    Ok(Json(AffectedResponse {
        message: format!("Product type deleted, {detached} products detached"),
        rows: detached,
    }))
}
