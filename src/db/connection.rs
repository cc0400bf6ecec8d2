use std::fs;
use std::path::PathBuf;

use rusqlite::Connection;

use crate::config::Config;
use crate::error::MealplanError;

use super::migrations;

/// Open the plan database. Fails with `NOT_INITIALIZED` until `mealplan init` has run.
pub fn open_db(config: &Config) -> Result<Connection, MealplanError> {
    let path = config.db_path();
    if !path.exists() {
        return Err(MealplanError::not_initialized());
    }
    tracing::debug!(path = %path.display(), "opening database");
    let conn = Connection::open(&path)?;
    configure_connection(&conn)?;
    Ok(conn)
}

/// Create the data directory and database if needed, then apply the schema.
/// Safe to run again on an existing database.
pub fn init_db(config: &Config) -> Result<PathBuf, MealplanError> {
    let path = config.db_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| MealplanError::persistence(e.to_string()))?;
    }
    let conn = Connection::open(&path)?;
    configure_connection(&conn)?;
    migrations::run_migrations(&conn)?;
    tracing::info!(path = %path.display(), "database initialized");
    Ok(path)
}

/// A migrated, throwaway in-memory database.
pub fn open_in_memory() -> Result<Connection, MealplanError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}

fn configure_connection(conn: &Connection) -> Result<(), MealplanError> {
    conn.execute_batch(
        "PRAGMA journal_mode=WAL;
         PRAGMA busy_timeout=5000;
         PRAGMA foreign_keys=ON;",
    )?;
    Ok(())
}
