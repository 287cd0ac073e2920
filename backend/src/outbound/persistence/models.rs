//! Internal Diesel row structs for the `exoplanets` table.
//!
//! These types never leave the persistence layer.

use diesel::prelude::*;
use uuid::Uuid;

use super::schema::exoplanets;

/// Row read back from `exoplanets`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = exoplanets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ExoplanetRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub distance: i32,
    pub radius: f64,
    pub mass: f64,
    pub kind: String,
}

/// Insertable row for new records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = exoplanets)]
pub(crate) struct NewExoplanetRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub description: &'a str,
    pub distance: i32,
    pub radius: f64,
    pub mass: f64,
    pub kind: &'a str,
}

/// Full-replace changeset; every column except the key.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = exoplanets)]
pub(crate) struct ExoplanetUpdate<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub distance: i32,
    pub radius: f64,
    pub mass: f64,
    pub kind: &'a str,
}
