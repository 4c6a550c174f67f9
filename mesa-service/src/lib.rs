use diesel::prelude::*;
use diesel::{ConnectionError, ConnectionResult, PgConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations};
use dotenvy::dotenv;
use std::env;

pub mod error;
pub mod models;
pub mod schema;
pub mod store;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// Upper bound for a single statement; anything slower is treated as a
/// transient failure.
pub const QUERY_TIMEOUT_MS: u32 = 5_000;

pub fn establish_connection() -> ConnectionResult<PgConnection> {
    dotenv().ok();

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let mut conn = PgConnection::establish(&database_url)?;
    diesel::sql_query(format!("SET statement_timeout = {QUERY_TIMEOUT_MS}"))
        .execute(&mut conn)
        .map_err(|_| ConnectionError::BadConnection("failed to set statement timeout".into()))?;
    Ok(conn)
}
