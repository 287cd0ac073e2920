//! PostgreSQL-backed `ExoplanetRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{ExoplanetRepository, ExoplanetRepositoryError};
use crate::domain::{Exoplanet, ExoplanetDraft, ExoplanetId};

use super::models::{ExoplanetRow, ExoplanetUpdate, NewExoplanetRow};
use super::pool::{DbPool, PoolError};
use super::schema::exoplanets;

/// Diesel-backed implementation of the `ExoplanetRepository` port.
///
/// Updates and deletes are single statements without row-count checks.
#[derive(Clone)]
pub struct DieselExoplanetRepository {
    pool: DbPool,
}

impl DieselExoplanetRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ExoplanetRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            ExoplanetRepositoryError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> ExoplanetRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => ExoplanetRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => {
            ExoplanetRepositoryError::query("database query error")
        }
        DieselError::DatabaseError(kind, _) => match kind {
            DatabaseErrorKind::UniqueViolation => {
                ExoplanetRepositoryError::conflict("exoplanet id already exists")
            }
            DatabaseErrorKind::ClosedConnection => {
                ExoplanetRepositoryError::connection("database connection error")
            }
            _ => ExoplanetRepositoryError::query("database error"),
        },
        _ => ExoplanetRepositoryError::query("database error"),
    }
}

/// Rebuild a domain record, re-running validation on the stored values.
fn row_to_exoplanet(row: ExoplanetRow) -> Result<Exoplanet, ExoplanetRepositoryError> {
    let id = ExoplanetId::from_uuid(row.id);
    let draft = ExoplanetDraft {
        name: row.name,
        description: row.description,
        distance: i64::from(row.distance),
        radius: row.radius,
        mass: row.mass,
        kind: row.kind,
    };
    Exoplanet::new(id, draft).map_err(|err| {
        ExoplanetRepositoryError::query(format!("corrupted exoplanet row {id}: {err}"))
    })
}

#[async_trait]
impl ExoplanetRepository for DieselExoplanetRepository {
    async fn create(&self, exoplanet: &Exoplanet) -> Result<(), ExoplanetRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewExoplanetRow {
            id: *exoplanet.id().as_uuid(),
            name: exoplanet.name(),
            description: exoplanet.description(),
            distance: exoplanet.distance(),
            radius: exoplanet.radius(),
            mass: exoplanet.mass(),
            kind: exoplanet.kind().as_str(),
        };

        diesel::insert_into(exoplanets::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn list(&self) -> Result<Vec<Exoplanet>, ExoplanetRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ExoplanetRow> = exoplanets::table
            .select(ExoplanetRow::as_select())
            .order_by((exoplanets::name.asc(), exoplanets::id.asc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_exoplanet).collect()
    }

    async fn find_by_id(
        &self,
        id: &ExoplanetId,
    ) -> Result<Option<Exoplanet>, ExoplanetRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ExoplanetRow> = exoplanets::table
            .filter(exoplanets::id.eq(id.as_uuid()))
            .select(ExoplanetRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_exoplanet).transpose()
    }

    async fn update(&self, exoplanet: &Exoplanet) -> Result<(), ExoplanetRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changes = ExoplanetUpdate {
            name: exoplanet.name(),
            description: exoplanet.description(),
            distance: exoplanet.distance(),
            radius: exoplanet.radius(),
            mass: exoplanet.mass(),
            kind: exoplanet.kind().as_str(),
        };

        diesel::update(exoplanets::table.filter(exoplanets::id.eq(exoplanet.id().as_uuid())))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn delete(&self, id: &ExoplanetId) -> Result<(), ExoplanetRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(exoplanets::table.filter(exoplanets::id.eq(id.as_uuid())))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
