use axum::{
    Router,
    extract::Path,
    extract::rejection::JsonRejection,
    response::Json,
    routing::{get, put},
};
use tracing::instrument;

use mesa_service::establish_connection;
use mesa_service::store::order_items;

use crate::error::ApiError;
use crate::models::*;

pub fn router() -> Router {
    Router::new()
        .route(
            "/order-items/{table}",
            get(list_order_items)
                .post(add_order_item)
                .delete(clear_order),
        )
        .route(
            "/order-items/{table}/{product_id}",
            put(update_order_item).delete(remove_order_item),
        )
}

#[utoipa::path(
    get,
    path = "/order-items/{table}",
    responses(
        (status = 200, description = "Lines of the table's open order; empty when idle", body = [OrderItemResponse]),
        (status = 500, description = "Internal error", body = ApiErrorResponse),
    ),
    params(
        ("table" = i32, Path, description = "Table ID")
    ),
    tag = "order-items"
)]
#[instrument]
pub async fn list_order_items(
    Path(table_id): Path<i32>,
) -> Result<Json<Vec<OrderItemResponse>>, ApiError> {
    let conn = &mut establish_connection()?;
    let lines = order_items::list_order_items(conn, table_id)?;

    Ok(Json(
        lines
            .into_iter()
            .map(|line| OrderItemResponse {
                product_id: line.product_id,
                name: line.name,
                quantity: line.quantity,
                price: line.price,
                product_type: line.type_name,
            })
            .collect(),
    ))
}

#[utoipa::path(
    post,
    path = "/order-items/{table}",
    request_body = AddOrderItemRequest,
    responses(
        (status = 200, description = "Line appended to the table's open order", body = MessageResponse),
        (status = 400, description = "Missing productId or quantity", body = ApiErrorResponse),
        (status = 404, description = "Table has no open order", body = ApiErrorResponse),
    ),
    params(
        ("table" = i32, Path, description = "Table ID")
    ),
    tag = "order-items"
)]
#[instrument]
pub async fn add_order_item(
    Path(table_id): Path<i32>,
    payload: Result<Json<AddOrderItemRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(payload) = payload?;
    let (Some(product_id), Some(quantity)) = (payload.product_id, payload.quantity) else {
        return Err(ApiError::Validation(
            "productId and quantity are required".into(),
        ));
    };

    let conn = &mut establish_connection()?;
    order_items::add_order_item(conn, table_id, product_id, quantity)?;
    Ok(Json(MessageResponse {
        message: format!("Product {product_id} added to table {table_id}"),
    }))
}

#[utoipa::path(
    put,
    path = "/order-items/{table}/{product_id}",
    request_body = UpdateOrderItemRequest,
    responses(
        (status = 200, description = "Quantity updated", body = AffectedResponse),
        (status = 400, description = "Missing quantity", body = ApiErrorResponse),
        (status = 404, description = "No matching order line", body = ApiErrorResponse),
    ),
    params(
        ("table" = i32, Path, description = "Table ID"),
        ("product_id" = i32, Path, description = "Product ID")
    ),
    tag = "order-items"
)]
#[instrument]
pub async fn update_order_item(
    Path((table_id, product_id)): Path<(i32, i32)>,
    payload: Result<Json<UpdateOrderItemRequest>, JsonRejection>,
) -> Result<Json<AffectedResponse>, ApiError> {
    let Json(payload) = payload?;
    let quantity = payload
        .quantity
        .ok_or_else(|| ApiError::Validation("quantity is required".into()))?;

    let conn = &mut establish_connection()?;
    let rows = order_items::set_order_item_quantity(conn, table_id, product_id, quantity)?;
    Ok(Json(AffectedResponse {
        message: "Order item updated".into(),
        rows,
    }))
}

#[utoipa::path(
    delete,
    path = "/order-items/{table}/{product_id}",
    responses(
        (status = 200, description = "Matching order lines deleted", body = AffectedResponse),
        (status = 404, description = "No matching order line", body = ApiErrorResponse),
    ),
    params(
        ("table" = i32, Path, description = "Table ID"),
        ("product_id" = i32, Path, description = "Product ID")
    ),
    tag = "order-items"
)]
#[instrument]
pub async fn remove_order_item(
    Path((table_id, product_id)): Path<(i32, i32)>,
) -> Result<Json<AffectedResponse>, ApiError> {
    let conn = &mut establish_connection()?;
    let rows = order_items::remove_order_item(conn, table_id, product_id)?;
    Ok(Json(AffectedResponse {
        message: format!("Product {product_id} removed from table {table_id}"),
        rows,
    }))
}

/// Closes a tab out for good: deletes the order's lines and the order row
/// itself. The id matches either a table or an order.
#[utoipa::path(
    delete,
    path = "/order-items/{table}",
    responses(
        (status = 200, description = "Order and its lines deleted", body = AffectedResponse),
        (status = 404, description = "No matching order", body = ApiErrorResponse),
    ),
    params(
        ("table" = i32, Path, description = "Table ID or order ID")
    ),
    tag = "order-items"
)]
#[instrument]
pub async fn clear_order(Path(id): Path<i32>) -> Result<Json<AffectedResponse>, ApiError> {
    let conn = &mut establish_connection()?;
    let rows = order_items::clear_order(conn, id)?;
    Ok(Json(AffectedResponse {
        message: "Order items and order removed".into(),
        rows,
    }))
}
