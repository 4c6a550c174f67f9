use diesel::{prelude::*, PgConnection};

use crate::error::StoreError;
use crate::models::{NewOrderProduct, OrderLine, OrderProduct};
use crate::schema::{order_products, product_types, products, table_orders};

pub fn list_order_items(
    conn: &mut PgConnection,
    mesa_id: i32,
) -> Result<Vec<OrderLine>, StoreError> {
    let rows = order_products::table
        .inner_join(table_orders::table)
        .inner_join(products::table.left_join(product_types::table))
        .filter(table_orders::mesa_id.eq(mesa_id))
        .select((
            products::product_id,
            products::name,
            order_products::quantity,
            products::price,
            product_types::type_name.nullable(),
        ))
        .order(order_products::order_product_id.asc())
        .load::<OrderLine>(conn)?;
    Ok(rows)
}

fn open_order_id(
    conn: &mut PgConnection,
    mesa_id: i32,
) -> Result<Option<i32>, diesel::result::Error> {
    table_orders::table
        .filter(table_orders::mesa_id.eq(mesa_id))
        .select(table_orders::order_id)
        .order(table_orders::order_id.asc())
        .first(conn)
        .optional()
}

/// Appends a line to the table's open order. A table with no open order is
/// NotFound and nothing is inserted. Repeated adds for the same product
/// append rows; merging quantities is a client concern.
pub fn add_order_item(
    conn: &mut PgConnection,
    mesa_id: i32,
    product_id: i32,
    quantity: i32,
) -> Result<OrderProduct, StoreError> {
    conn.transaction::<_, StoreError, _>(|conn| {
        let Some(order_id) = open_order_id(conn, mesa_id)? else {
            return Err(StoreError::NotFound { what: "open order" });
        };

        let row = diesel::insert_into(order_products::table)
            .values(&NewOrderProduct {
                order_id,
                product_id,
                quantity,
            })
            .returning(OrderProduct::as_returning())
            .get_result(conn)?;
        Ok(row)
    })
}

/// Sets the quantity on the matching line(s) of the table's order. Zero
/// and negative values are accepted (documented behavior).
pub fn set_order_item_quantity(
    conn: &mut PgConnection,
    mesa_id: i32,
    product_id: i32,
    quantity: i32,
) -> Result<usize, StoreError> {
    let order_ids = table_orders::table
        .filter(table_orders::mesa_id.eq(mesa_id))
        .select(table_orders::order_id);
    let affected = diesel::update(
        order_products::table
            .filter(order_products::product_id.eq(product_id))
            .filter(order_products::order_id.eq_any(order_ids)),
    )
    .set(order_products::quantity.eq(quantity))
    .execute(conn)?;
    if affected == 0 {
        return Err(StoreError::NotFound { what: "order item" });
    }
    Ok(affected)
}

pub fn remove_order_item(
    conn: &mut PgConnection,
    mesa_id: i32,
    product_id: i32,
) -> Result<usize, StoreError> {
    let order_ids = table_orders::table
        .filter(table_orders::mesa_id.eq(mesa_id))
        .select(table_orders::order_id);
    let affected = diesel::delete(
        order_products::table
            .filter(order_products::product_id.eq(product_id))
            .filter(order_products::order_id.eq_any(order_ids)),
    )
    .execute(conn)?;
    if affected == 0 {
        return Err(StoreError::NotFound { what: "order item" });
    }
    Ok(affected)
}

/// Closes a tab out for good: deletes the order lines and the order row
/// itself. `id` matches either a table or an order. Returns the number of
/// deleted lines.
pub fn clear_order(conn: &mut PgConnection, id: i32) -> Result<usize, StoreError> {
    conn.transaction::<_, StoreError, _>(|conn| {
        let matching = table_orders::table
            .filter(table_orders::mesa_id.eq(id).or(table_orders::order_id.eq(id)))
            .select(table_orders::order_id);
        let cleared = diesel::delete(
            order_products::table.filter(order_products::order_id.eq_any(matching)),
        )
        .execute(conn)?;

        let closed = diesel::delete(
            table_orders::table
                .filter(table_orders::mesa_id.eq(id).or(table_orders::order_id.eq(id))),
        )
        .execute(conn)?;
        if closed == 0 {
            return Err(StoreError::NotFound { what: "order" });
        }
        Ok(cleared)
    })
}
