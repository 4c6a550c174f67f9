use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableResponse {
    /// Identifier of the table
    pub table_id: i32,
    /// Display number shown to staff
    pub table_number: i32,
    /// Open-orders indicator kept by staff
    pub open_orders: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTableRequest {
    pub table_number: Option<i32>,
    pub open_orders: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductTypeResponse {
    /// Identifier of the product type
    pub product_type_id: i32,
    /// Category name, e.g. "Bebida"
    pub type_name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductTypeRequest {
    /// Category name; required
    pub type_name: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Identifier of the product
    pub product_id: i32,
    /// Menu item name
    pub name: String,
    /// Stock count
    pub quantity: i32,
    /// Unit price as a decimal string
    #[schema(value_type = String)]
    pub price: BigDecimal,
    /// Category name, null for untyped products
    pub product_type: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub name: Option<String>,
    pub quantity: Option<i32>,
    // Kept as a JSON number and parsed from its decimal representation, so
    // 1.2 stays 1.2 instead of the nearest binary float.
    #[schema(value_type = Option<f64>)]
    pub price: Option<serde_json::Number>,
    /// Category NAME; an unknown name is stored as no category
    pub product_type: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    /// Identifier of the ordered product
    pub product_id: i32,
    /// Menu item name
    pub name: String,
    /// Ordered quantity for this line
    pub quantity: i32,
    /// Unit price as a decimal string
    #[schema(value_type = String)]
    pub price: BigDecimal,
    /// Category name, null for untyped products
    pub product_type: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddOrderItemRequest {
    pub product_id: Option<i32>,
    pub quantity: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderItemRequest {
    pub quantity: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable outcome
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AffectedResponse {
    /// Human-readable outcome
    pub message: String,
    /// Number of rows affected
    pub rows: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_response_uses_camel_case_keys() {
        let value = serde_json::to_value(TableResponse {
            table_id: 3,
            table_number: 7,
            open_orders: 1,
        })
        .unwrap();
        assert_eq!(
            value,
            serde_json::json!({"tableId": 3, "tableNumber": 7, "openOrders": 1})
        );
    }

    #[test]
    fn price_serializes_as_decimal_string() {
        let value = serde_json::to_value(ProductResponse {
            product_id: 1,
            name: "Water".into(),
            quantity: 10,
            price: "1.5".parse().unwrap(),
            product_type: None,
        })
        .unwrap();
        assert_eq!(value["price"], "1.5");
        assert_eq!(value["productType"], serde_json::Value::Null);
    }

    #[test]
    fn product_request_keeps_the_decimal_price_representation() {
        let request: ProductRequest =
            serde_json::from_str(r#"{"name":"Water","quantity":10,"price":1.2}"#).unwrap();
        assert_eq!(request.price.unwrap().to_string(), "1.2");
        assert_eq!(request.product_type, None);
    }
}
