use diesel::{prelude::*, PgConnection};

use crate::error::StoreError;
use crate::models::Mesa;
use crate::schema::{mesas, order_products, table_orders};

pub fn list_tables(conn: &mut PgConnection) -> Result<Vec<Mesa>, StoreError> {
    let rows = mesas::table
        .select(Mesa::as_select())
        .order(mesas::table_number.asc())
        .load(conn)?;
    Ok(rows)
}

#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = mesas)]
pub struct TableChanges {
    pub table_number: Option<i32>,
    pub open_orders: Option<i32>,
}

pub fn update_table(
    conn: &mut PgConnection,
    mesa_id: i32,
    changes: &TableChanges,
) -> Result<usize, StoreError> {
    if changes.table_number.is_none() && changes.open_orders.is_none() {
        return Err(StoreError::Validation(
            "at least one of tableNumber and openOrders is required".into(),
        ));
    }

    let affected = diesel::update(mesas::table.find(mesa_id))
        .set(changes)
        .execute(conn)?;
    if affected == 0 {
        return Err(StoreError::NotFound { what: "table" });
    }
    Ok(affected)
}

/// Empties the table's open order by deleting its lines. The `TableOrder`
/// row itself survives, so the table can be re-used without re-seeding.
/// Zero deleted lines reports NotFound, which conflates "already closed"
/// with "no such table" (documented behavior).
pub fn close_table(conn: &mut PgConnection, mesa_id: i32) -> Result<usize, StoreError> {
    conn.transaction::<_, StoreError, _>(|conn| {
        let order_ids = table_orders::table
            .filter(table_orders::mesa_id.eq(mesa_id))
            .select(table_orders::order_id);
        let cleared = diesel::delete(
            order_products::table.filter(order_products::order_id.eq_any(order_ids)),
        )
        .execute(conn)?;
        if cleared == 0 {
            return Err(StoreError::NotFound { what: "order item" });
        }
        Ok(cleared)
    })
}
