use diesel::dsl::exists;
use diesel::{prelude::*, PgConnection};

use crate::error::StoreError;
use crate::models::{NewProductType, ProductType};
use crate::schema::{product_types, products};

pub fn list_product_types(conn: &mut PgConnection) -> Result<Vec<ProductType>, StoreError> {
    let rows = product_types::table
        .select(ProductType::as_select())
        .order(product_types::product_type_id.asc())
        .load(conn)?;
    Ok(rows)
}

pub fn get_product_type(conn: &mut PgConnection, id: i32) -> Result<ProductType, StoreError> {
    product_types::table
        .find(id)
        .select(ProductType::as_select())
        .first(conn)
        .optional()?
        .ok_or(StoreError::NotFound {
            what: "product type",
        })
}

pub fn create_product_type(conn: &mut PgConnection, name: &str) -> Result<ProductType, StoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StoreError::Validation(
            "product type name is required".into(),
        ));
    }

    let taken: bool = diesel::select(exists(
        product_types::table.filter(product_types::type_name.eq(name)),
    ))
    .get_result(conn)?;
    if taken {
        return Err(StoreError::Conflict(format!(
            "product type '{name}' already exists"
        )));
    }

    let row = diesel::insert_into(product_types::table)
        .values(&NewProductType { type_name: name })
        .returning(ProductType::as_returning())
        .get_result(conn)?;
    Ok(row)
}

pub fn rename_product_type(
    conn: &mut PgConnection,
    id: i32,
    name: &str,
) -> Result<usize, StoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StoreError::Validation(
            "product type name is required".into(),
        ));
    }

    let taken: bool = diesel::select(exists(
        product_types::table
            .filter(product_types::type_name.eq(name))
            .filter(product_types::product_type_id.ne(id)),
    ))
    .get_result(conn)?;
    if taken {
        return Err(StoreError::Conflict(format!(
            "product type '{name}' already exists"
        )));
    }

    let affected = diesel::update(product_types::table.find(id))
        .set(product_types::type_name.eq(name))
        .execute(conn)?;
    if affected == 0 {
        return Err(StoreError::NotFound {
            what: "product type",
        });
    }
    Ok(affected)
}

/// Detaches every product referencing the type before deleting the type
/// row, so no product is ever left pointing at a missing type. Returns
/// the number of detached products.
pub fn delete_product_type(conn: &mut PgConnection, id: i32) -> Result<usize, StoreError> {
    conn.transaction::<_, StoreError, _>(|conn| {
        let detached =
            diesel::update(products::table.filter(products::product_type_id.eq(id)))
                .set(products::product_type_id.eq(None::<i32>))
                .execute(conn)?;

        let deleted = diesel::delete(product_types::table.find(id)).execute(conn)?;
        if deleted == 0 {
            return Err(StoreError::NotFound {
                what: "product type",
            });
        }
        Ok(detached)
    })
}
