use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection};
use diesel::sqlite::SqliteConnection;
use std::error::Error;
use std::io::Write;
use std::time::Duration;

use crate::store::StoreError;

pub mod filter;

embed_migrations!("migrations");

pub type SqlitePool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

const CONNECTION_PRAGMAS: &str = "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;";

const DROP_TABLES: &str = "
    DROP TABLE IF EXISTS sections;
    DROP TABLE IF EXISTS containers;
    DROP TABLE IF EXISTS __diesel_schema_migrations;
";

#[derive(Debug)]
struct ConnectionPragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionPragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(CONNECTION_PRAGMAS)
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Connects, then brings the schema up to date. Tables are dropped first
/// when `db_sync_force` is set.
///
/// # Errors
///
/// Will return Err for any problem in connection to database or running migrations
pub fn setup(config: &config::Config) -> Result<SqliteConnection, Box<dyn Error>> {
    let force = config.get_bool("db_sync_force")?;
    let conn = connect(config)?;
    if config.get_bool("debug")? {
        sync_with_output(&conn, force, &mut std::io::stdout())?;
    } else {
        sync(&conn, force)?;
    }
    Ok(conn)
}

/// Runs pending migrations. With `force`, both tables and the migration
/// ledger are dropped beforehand so the schema is rebuilt empty.
///
/// # Errors
///
/// Will return Err if dropping tables or running migrations fails
pub fn sync(conn: &SqliteConnection, force: bool) -> Result<(), StoreError> {
    sync_with_output(conn, force, &mut std::io::sink())
}

/// Same as [`sync`], reporting each migration to `out`.
///
/// # Errors
///
/// Will return Err if dropping tables or running migrations fails
pub fn sync_with_output(
    conn: &SqliteConnection,
    force: bool,
    out: &mut dyn Write,
) -> Result<(), StoreError> {
    if force {
        log::info!("Dropping and recreating tables");
        conn.batch_execute(DROP_TABLES)?;
    }
    embedded_migrations::run_with_output(conn, out)?;
    Ok(())
}

/// # Errors
///
/// Will return Err for any problem in connection to database
pub fn connect(config: &config::Config) -> Result<SqliteConnection, Box<dyn Error>> {
    let database_url = config.get_str("database_url")?;
    Ok(establish(&database_url)?)
}

/// # Errors
///
/// Will return Err if the database cannot be opened
pub fn establish(database_url: &str) -> Result<SqliteConnection, StoreError> {
    let conn = SqliteConnection::establish(database_url)?;
    conn.batch_execute(CONNECTION_PRAGMAS)?;
    Ok(conn)
}

/// # Errors
///
/// Will return Err if the pool cannot open its initial connections
pub fn create_pool(config: &config::Config) -> Result<SqlitePool, Box<dyn Error>> {
    let database_url = config.get_str("database_url")?;
    let max_size = config.get::<u32>("db_pool_size")?;
    Ok(build_pool(&database_url, max_size)?)
}

/// # Errors
///
/// Will return Err if the pool cannot open its initial connections
pub fn build_pool(database_url: &str, max_size: u32) -> Result<SqlitePool, StoreError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = r2d2::Pool::builder()
        .max_size(max_size)
        .connection_timeout(Duration::from_secs(30))
        .connection_customizer(Box::new(ConnectionPragmas))
        .build(manager)?;
    Ok(pool)
}
