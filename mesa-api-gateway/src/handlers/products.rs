use axum::{
    Router,
    extract::Path,
    extract::rejection::JsonRejection,
    response::Json,
    routing::get,
};
use bigdecimal::BigDecimal;
use tracing::instrument;

use mesa_service::establish_connection;
use mesa_service::models::ProductWithType;
use mesa_service::store::products::{self, ProductInput};

use crate::error::ApiError;
use crate::models::*;

pub fn router() -> Router {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}

fn to_response(row: ProductWithType) -> ProductResponse {
    ProductResponse {
        product_id: row.product_id,
        name: row.name,
        quantity: row.quantity,
        price: row.price,
        product_type: row.type_name,
    }
}

// name, quantity and price are all required; the category name is not.
fn product_input(payload: &ProductRequest) -> Result<ProductInput<'_>, ApiError> {
    let (Some(name), Some(quantity), Some(price)) = (
        payload.name.as_deref(),
        payload.quantity,
        payload.price.as_ref(),
    ) else {
        return Err(ApiError::Validation(
            "Missing required fields: name, quantity and price".into(),
        ));
    };
    let price: BigDecimal = price
        .to_string()
        .parse()
        .map_err(|_| ApiError::Validation("Quantity and price must be numeric values".into()))?;
    Ok(ProductInput {
        name,
        quantity,
        price,
        product_type: payload.product_type.as_deref(),
    })
}

#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "All products with their category", body = [ProductResponse]),
        (status = 500, description = "Internal error", body = ApiErrorResponse),
    ),
    tag = "products"
)]
#[instrument]
pub async fn list_products() -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let conn = &mut establish_connection()?;
    let rows = products::list_products(conn)?;
    Ok(Json(rows.into_iter().map(to_response).collect()))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    responses(
        (status = 200, description = "The product", body = ProductResponse),
        (status = 404, description = "Product not found", body = ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    tag = "products"
)]
#[instrument]
pub async fn get_product(Path(product_id): Path<i32>) -> Result<Json<ProductResponse>, ApiError> {
    let conn = &mut establish_connection()?;
    let row = products::get_product(conn, product_id)?;
    Ok(Json(to_response(row)))
}

#[utoipa::path(
    post,
    path = "/products",
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product created", body = MessageResponse),
        (status = 400, description = "Missing or invalid fields", body = ApiErrorResponse),
    ),
    tag = "products"
)]
#[instrument]
pub async fn create_product(
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(payload) = payload?;
    let input = product_input(&payload)?;

    let conn = &mut establish_connection()?;
    let row = products::create_product(conn, &input)?;
    Ok(Json(MessageResponse {
        message: format!("Product '{}' added", row.name),
    }))
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product updated", body = AffectedResponse),
        (status = 400, description = "Missing or invalid fields", body = ApiErrorResponse),
        (status = 404, description = "Product not found", body = ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    tag = "products"
)]
#[instrument]
pub async fn update_product(
    Path(product_id): Path<i32>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<Json<AffectedResponse>, ApiError> {
    let Json(payload) = payload?;
    let input = product_input(&payload)?;

    let conn = &mut establish_connection()?;
    let rows = products::update_product(conn, product_id, &input)?;
    Ok(Json(AffectedResponse {
        message: "Product updated".into(),
        rows,
    }))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    responses(
        (status = 200, description = "Product and its order lines deleted", body = MessageResponse),
        (status = 404, description = "Product not found", body = ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    tag = "products"
)]
#[instrument]
pub async fn delete_product(Path(product_id): Path<i32>) -> Result<Json<MessageResponse>, ApiError> {
    let conn = &mut establish_connection()?;
    products::delete_product(conn, product_id)?;
    Ok(Json(MessageResponse {
        message: "Product and associated order items deleted".into(),
    }))
}
