use axum::{
    Router,
    extract::Path,
    extract::rejection::JsonRejection,
    response::Json,
    routing::{get, put},
};
use tracing::instrument;

use mesa_service::establish_connection;
use mesa_service::store::tables::{self, TableChanges};

use crate::error::ApiError;
use crate::models::*;

pub fn router() -> Router {
    Router::new()
        .route("/tables", get(list_tables))
        .route("/tables/{id}", put(update_table))
}

#[utoipa::path(
    get,
    path = "/tables",
    responses(
        (status = 200, description = "All tables", body = [TableResponse]),
        (status = 500, description = "Internal error", body = ApiErrorResponse),
    ),
    tag = "tables"
)]
#[instrument]
pub async fn list_tables() -> Result<Json<Vec<TableResponse>>, ApiError> {
    let conn = &mut establish_connection()?;
    let rows = tables::list_tables(conn)?;

    Ok(Json(
        rows.into_iter()
            .map(|mesa| TableResponse {
                table_id: mesa.mesa_id,
                table_number: mesa.table_number,
                open_orders: mesa.open_orders,
            })
            .collect(),
    ))
}

/// With a JSON body this updates the table's attributes; without one it
/// closes the table out by deleting the open order's lines.
#[utoipa::path(
    put,
    path = "/tables/{id}",
    request_body(content = UpdateTableRequest, description = "Omit the body entirely to close the table instead"),
    responses(
        (status = 200, description = "Table updated or closed", body = AffectedResponse),
        (status = 400, description = "No fields to update", body = ApiErrorResponse),
        (status = 404, description = "Table or open order items not found", body = ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Table ID")
    ),
    tag = "tables"
)]
#[instrument]
pub async fn update_table(
    Path(table_id): Path<i32>,
    payload: Result<Json<UpdateTableRequest>, JsonRejection>,
) -> Result<Json<AffectedResponse>, ApiError> {
    match payload {
        Ok(Json(body)) => {
            if body.table_number.is_none() && body.open_orders.is_none() {
                return Err(ApiError::Validation(
                    "at least one of tableNumber and openOrders is required".into(),
                ));
            }
            let conn = &mut establish_connection()?;
            let rows = tables::update_table(
                conn,
                table_id,
                &TableChanges {
                    table_number: body.table_number,
                    open_orders: body.open_orders,
                },
            )?;
            Ok(Json(AffectedResponse {
                message: format!("Table {table_id} updated"),
                rows,
            }))
        }
        Err(JsonRejection::MissingJsonContentType(_)) => {
            let conn = &mut establish_connection()?;
            let rows = tables::close_table(conn, table_id)?;
            Ok(Json(AffectedResponse {
                message: format!("Order items for table {table_id} deleted"),
                rows,
            }))
        }
        Err(rejection) => Err(rejection.into()),
    }
}
