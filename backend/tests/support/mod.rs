//! Shared helpers for database-backed integration tests.
//!
//! Suites read `EXOPLANETS_TEST_DATABASE_URL` and skip with a marker on
//! stderr when it is unset. Tables are reset through the synchronous
//! `postgres` client so no Diesel transaction is open during cleanup.

use postgres::{Client, NoTls};

/// Environment variable naming a disposable PostgreSQL database.
pub const TEST_DATABASE_URL_ENV: &str = "EXOPLANETS_TEST_DATABASE_URL";

/// Database URL for integration tests, or `None` after printing a skip marker.
pub fn test_database_url() -> Option<String> {
    match std::env::var(TEST_DATABASE_URL_ENV) {
        Ok(url) if !url.trim().is_empty() => Some(url),
        _ => {
            eprintln!("SKIP-TEST-DATABASE: {TEST_DATABASE_URL_ENV} is not set");
            None
        }
    }
}

/// Render a `postgres` error with the SQLSTATE and detail when present.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };

    let mut summary = format!("postgres error {:?}: {}", db_error.code(), db_error.message());
    if let Some(detail) = db_error.detail() {
        summary.push_str("; detail: ");
        summary.push_str(detail);
    }
    summary
}

/// Remove every catalogued exoplanet.
pub fn clear_exoplanets_table(database_url: &str) -> Result<(), String> {
    let mut client =
        Client::connect(database_url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute("DELETE FROM exoplanets")
        .map_err(|err| format_postgres_error(&err))
}
