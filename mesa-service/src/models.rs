use bigdecimal::BigDecimal;
use diesel::prelude::*;

use crate::schema::{mesas, order_products, product_types, products, table_orders};

/// A physical restaurant table. `open_orders` is a display counter kept by
/// staff, not derived from `TableOrder` rows.
#[derive(Queryable, Selectable, Identifiable, Debug, PartialEq)]
#[diesel(table_name = mesas, primary_key(mesa_id))]
pub struct Mesa {
    pub mesa_id: i32,
    pub table_number: i32,
    pub open_orders: i32,
}

#[derive(Queryable, Selectable, Identifiable, Debug, PartialEq)]
#[diesel(table_name = product_types, primary_key(product_type_id))]
pub struct ProductType {
    pub product_type_id: i32,
    pub type_name: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = product_types)]
pub struct NewProductType<'a> {
    pub type_name: &'a str,
}

/// A menu item. `quantity` is the stock count; `product_type_id` is nulled
/// out, never left dangling, when its type is deleted.
#[derive(Queryable, Selectable, Identifiable, Debug, PartialEq)]
#[diesel(table_name = products, primary_key(product_id))]
pub struct Product {
    pub product_id: i32,
    pub name: String,
    pub quantity: i32,
    pub price: BigDecimal,
    pub product_type_id: Option<i32>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = products)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub quantity: i32,
    pub price: BigDecimal,
    pub product_type_id: Option<i32>,
}

/// The tab a table accumulates lines on. At most one open order per table
/// is assumed; rows are seeded at setup time, not created in-band.
#[derive(Queryable, Selectable, Identifiable, Debug, PartialEq)]
#[diesel(table_name = table_orders, primary_key(order_id))]
pub struct TableOrder {
    pub order_id: i32,
    pub mesa_id: i32,
}

#[derive(Queryable, Selectable, Identifiable, Debug, PartialEq)]
#[diesel(table_name = order_products, primary_key(order_product_id))]
pub struct OrderProduct {
    pub order_product_id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = order_products)]
pub struct NewOrderProduct {
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

/// Menu read projection: a product joined with its optional type name.
#[derive(Queryable, Debug, PartialEq)]
pub struct ProductWithType {
    pub product_id: i32,
    pub name: String,
    pub quantity: i32,
    pub price: BigDecimal,
    pub type_name: Option<String>,
}

/// Order read projection: one line of a table's order. `quantity` is the
/// ordered count, not the product's stock.
#[derive(Queryable, Debug, PartialEq)]
pub struct OrderLine {
    pub product_id: i32,
    pub name: String,
    pub quantity: i32,
    pub price: BigDecimal,
    pub type_name: Option<String>,
}
