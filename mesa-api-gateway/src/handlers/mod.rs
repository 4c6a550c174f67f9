pub mod order_items;
pub mod product_types;
pub mod products;
pub mod tables;

// Re-export routers for easier importing
pub use order_items::router as order_items_router;
pub use product_types::router as product_types_router;
pub use products::router as products_router;
pub use tables::router as tables_router;

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        tables::list_tables,
        tables::update_table,
        product_types::list_product_types,
        product_types::get_product_type,
        product_types::create_product_type,
        product_types::update_product_type,
        product_types::delete_product_type,
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
        order_items::list_order_items,
        order_items::add_order_item,
        order_items::update_order_item,
        order_items::remove_order_item,
        order_items::clear_order,
    ),
    components(
        schemas(
            crate::models::TableResponse,
            crate::models::UpdateTableRequest,
            crate::models::ProductTypeResponse,
            crate::models::ProductTypeRequest,
            crate::models::ProductResponse,
            crate::models::ProductRequest,
            crate::models::OrderItemResponse,
            crate::models::AddOrderItemRequest,
            crate::models::UpdateOrderItemRequest,
            crate::models::MessageResponse,
            crate::models::AffectedResponse,
            crate::models::ApiErrorResponse,
        )
    ),
    tags(
        (name = "tables", description = "Restaurant table endpoints"),
        (name = "product-types", description = "Menu category endpoints"),
        (name = "products", description = "Menu item endpoints"),
        (name = "order-items", description = "Order line endpoints")
    ),
    info(
        title = "Mesa POS API",
        description = "REST API for the Mesa restaurant point-of-sale",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use super::*;

    async fn error_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    // Requests that fail validation are rejected before the store is
    // touched, so these tests run without a database.

    #[tokio::test]
    async fn create_product_type_without_name_is_400() {
        let response = product_types_router()
            .oneshot(json_request("POST", "/product-types", "{}"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = error_body(response).await;
        assert_eq!(body["error"], "Product type name is required");
    }

    #[tokio::test]
    async fn create_product_with_missing_fields_is_400() {
        let response = products_router()
            .oneshot(json_request("POST", "/products", r#"{"name":"Water"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_product_with_malformed_body_is_400() {
        let response = products_router()
            .oneshot(json_request("POST", "/products", "{not json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = error_body(response).await;
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn add_order_item_without_quantity_is_400() {
        let response = order_items_router()
            .oneshot(json_request("POST", "/order-items/3", r#"{"productId":2}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_order_item_without_quantity_is_400() {
        let response = order_items_router()
            .oneshot(json_request("PUT", "/order-items/3/2", "{}"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_table_with_empty_body_is_400() {
        let response = tables_router()
            .oneshot(json_request("PUT", "/tables/3", "{}"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
