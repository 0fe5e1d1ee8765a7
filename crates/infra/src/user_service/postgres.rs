//! Postgres-backed authority store.
//!
//! Authorities live in a single `authority` table keyed by name. Uniqueness
//! is enforced by the primary key, so concurrent registrations of the same
//! name resolve to one row and one `AlreadyExists` error.

use sqlx::{PgPool, Row, postgres::PgPoolOptions};

use labofap_auth::{Authority, AuthorityName};

use super::{UserService, UserServiceError, default_authorities};

const UNIQUE_VIOLATION: &str = "23505";

pub struct PostgresUserService {
    pool: PgPool,
}

impl PostgresUserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect, create the schema if missing and seed default authorities.
    pub async fn connect(database_url: &str) -> Result<Self, UserServiceError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .map_err(store_error)?;

        let service = Self::new(pool);
        service.ensure_schema().await?;
        Ok(service)
    }

    pub async fn ensure_schema(&self) -> Result<(), UserServiceError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS authority (
                name VARCHAR(50) PRIMARY KEY
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(store_error)?;

        for name in default_authorities() {
            sqlx::query("INSERT INTO authority (name) VALUES ($1) ON CONFLICT (name) DO NOTHING")
                .bind(name.as_str())
                .execute(&self.pool)
                .await
                .map_err(store_error)?;
        }

        tracing::info!("authority schema ready");
        Ok(())
    }
}

fn store_error(err: sqlx::Error) -> UserServiceError {
    tracing::error!(error = %err, "authority store failure");
    UserServiceError::Store(err.to_string())
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .and_then(|db| db.code())
        .is_some_and(|code| code == UNIQUE_VIOLATION)
}

#[async_trait::async_trait]
impl UserService for PostgresUserService {
    async fn register_authority(&self, name: &AuthorityName) -> Result<Authority, UserServiceError> {
        let result = sqlx::query("INSERT INTO authority (name) VALUES ($1)")
            .bind(name.as_str())
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(Authority::new(name.clone())),
            Err(e) if is_unique_violation(&e) => {
                Err(UserServiceError::AlreadyExists(name.to_string()))
            }
            Err(e) => Err(store_error(e)),
        }
    }

    async fn get_authorities(&self) -> Result<Vec<String>, UserServiceError> {
        let rows = sqlx::query("SELECT name FROM authority ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(store_error)?;

        rows.iter()
            .map(|row| row.try_get::<String, _>("name").map_err(store_error))
            .collect()
    }

    async fn find_authority(
        &self,
        name: &AuthorityName,
    ) -> Result<Option<Authority>, UserServiceError> {
        let row = sqlx::query("SELECT name FROM authority WHERE name = $1")
            .bind(name.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error)?;

        match row {
            Some(row) => {
                let stored: String = row.try_get("name").map_err(store_error)?;
                let name = AuthorityName::new(stored)
                    .map_err(|e| UserServiceError::Store(e.to_string()))?;
                Ok(Some(Authority::new(name)))
            }
            None => Ok(None),
        }
    }
}
