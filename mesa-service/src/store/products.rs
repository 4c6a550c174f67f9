use bigdecimal::BigDecimal;
use diesel::{prelude::*, PgConnection};

use crate::error::StoreError;
use crate::models::{NewProduct, Product, ProductWithType};
use crate::schema::{order_products, product_types, products};

/// Fields accepted by product create/update. `product_type` is the TYPE
/// NAME; an unresolvable name stores NULL rather than failing
/// (silent-fallback policy carried over from the original contract).
#[derive(Debug)]
pub struct ProductInput<'a> {
    pub name: &'a str,
    pub quantity: i32,
    pub price: BigDecimal,
    pub product_type: Option<&'a str>,
}

pub fn list_products(conn: &mut PgConnection) -> Result<Vec<ProductWithType>, StoreError> {
    let rows = products::table
        .left_join(product_types::table)
        .select((
            products::product_id,
            products::name,
            products::quantity,
            products::price,
            product_types::type_name.nullable(),
        ))
        .order(products::product_id.asc())
        .load::<ProductWithType>(conn)?;
    Ok(rows)
}

pub fn get_product(conn: &mut PgConnection, id: i32) -> Result<ProductWithType, StoreError> {
    products::table
        .left_join(product_types::table)
        .filter(products::product_id.eq(id))
        .select((
            products::product_id,
            products::name,
            products::quantity,
            products::price,
            product_types::type_name.nullable(),
        ))
        .first::<ProductWithType>(conn)
        .optional()?
        .ok_or(StoreError::NotFound { what: "product" })
}

fn resolve_type_id(
    conn: &mut PgConnection,
    product_type: Option<&str>,
) -> Result<Option<i32>, StoreError> {
    let Some(name) = product_type else {
        return Ok(None);
    };
    let id = product_types::table
        .filter(product_types::type_name.eq(name))
        .select(product_types::product_type_id)
        .first::<i32>(conn)
        .optional()?;
    Ok(id)
}

pub fn create_product(
    conn: &mut PgConnection,
    input: &ProductInput<'_>,
) -> Result<Product, StoreError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(StoreError::Validation("product name is required".into()));
    }

    let product_type_id = resolve_type_id(conn, input.product_type)?;
    let row = diesel::insert_into(products::table)
        .values(&NewProduct {
            name,
            quantity: input.quantity,
            price: input.price.clone(),
            product_type_id,
        })
        .returning(Product::as_returning())
        .get_result(conn)?;
    Ok(row)
}

pub fn update_product(
    conn: &mut PgConnection,
    id: i32,
    input: &ProductInput<'_>,
) -> Result<usize, StoreError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(StoreError::Validation("product name is required".into()));
    }

    let product_type_id = resolve_type_id(conn, input.product_type)?;
    let affected = diesel::update(products::table.find(id))
        .set((
            products::name.eq(name),
            products::quantity.eq(input.quantity),
            products::price.eq(&input.price),
            products::product_type_id.eq(product_type_id),
        ))
        .execute(conn)?;
    if affected == 0 {
        return Err(StoreError::NotFound { what: "product" });
    }
    Ok(affected)
}

/// Deletes the product together with every order line referencing it, so
/// no order ever keeps a line for a product that no longer exists.
/// Returns the number of dropped order lines.
pub fn delete_product(conn: &mut PgConnection, id: i32) -> Result<usize, StoreError> {
    conn.transaction::<_, StoreError, _>(|conn| {
        let dropped_lines =
            diesel::delete(order_products::table.filter(order_products::product_id.eq(id)))
                .execute(conn)?;

        let deleted = diesel::delete(products::table.find(id)).execute(conn)?;
        if deleted == 0 {
            return Err(StoreError::NotFound { what: "product" });
        }
        Ok(dropped_lines)
    })
}
