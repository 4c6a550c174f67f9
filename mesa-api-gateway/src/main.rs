use axum::Router;
use diesel_migrations::MigrationHarness;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod error;
mod handlers;
mod models;

use handlers::{
    ApiDoc, order_items_router, product_types_router, products_router, tables_router,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let mut conn = mesa_service::establish_connection()?;
    conn.run_pending_migrations(mesa_service::MIGRATIONS)
        .expect("Failed to run migrations");
    drop(conn);

    let app = Router::new()
        .merge(tables_router())
        .merge(product_types_router())
        .merge(products_router())
        .merge(order_items_router())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive());

    let listen_addr =
        std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8100".to_string());
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    info!("POS API listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
