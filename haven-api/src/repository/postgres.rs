//! Postgres Job Offer Repository
//!
//! Handles all database operations on the `job_offer` table. The pool is
//! opened and the schema bootstrapped on the first request that needs them.

use std::time::Duration;

use async_trait::async_trait;
use haven_core::domain::job_offer::{JobOffer, JobOfferDraft, OfferId};
use sqlx::PgPool;

use super::lazy::LazyConnection;
use super::{JobOfferStore, StoreError};
use crate::db;

pub struct PgJobOfferStore {
    database_url: String,
    max_connections: u32,
    acquire_timeout: Duration,
    pool: LazyConnection<PgPool>,
}

impl PgJobOfferStore {
    pub fn new(database_url: String, max_connections: u32, acquire_timeout: Duration) -> Self {
        Self {
            database_url,
            max_connections,
            acquire_timeout,
            pool: LazyConnection::new("postgres"),
        }
    }

    async fn pool(&self) -> Result<&PgPool, StoreError> {
        self.pool
            .get_or_connect(|| async {
                let pool =
                    db::create_pool(&self.database_url, self.max_connections, self.acquire_timeout)
                        .await?;
                db::run_migrations(&pool).await?;
                Ok::<_, sqlx::Error>(pool)
            })
            .await
            .map_err(StoreError::from)
    }
}

/// Serial keys are positive 32-bit integers; anything else cannot match a row
fn parse_id(id: &OfferId) -> Option<i32> {
    id.as_str().parse::<i32>().ok().filter(|n| *n > 0)
}

#[async_trait]
impl JobOfferStore for PgJobOfferStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn create(&self, draft: JobOfferDraft) -> Result<JobOffer, StoreError> {
        let pool = self.pool().await?;

        let row = sqlx::query_as::<_, JobOfferRow>(
            r#"
            INSERT INTO job_offer (description, "position")
            VALUES ($1, $2)
            RETURNING id, description, "position"
            "#,
        )
        .bind(&draft.description)
        .bind(&draft.position)
        .fetch_one(pool)
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: &OfferId) -> Result<Option<JobOffer>, StoreError> {
        let Some(key) = parse_id(id) else {
            return Ok(None);
        };
        let pool = self.pool().await?;

        let row = sqlx::query_as::<_, JobOfferRow>(
            r#"
            SELECT id, description, "position"
            FROM job_offer
            WHERE id = $1
            "#,
        )
        .bind(key)
        .fetch_optional(pool)
        .await?;

        Ok(row.map(|r| r.into()))
    }

    async fn update(&self, offer: &JobOffer) -> Result<bool, StoreError> {
        let Some(key) = parse_id(&offer.id) else {
            return Ok(false);
        };
        let pool = self.pool().await?;

        let result = sqlx::query(
            r#"
            UPDATE job_offer
            SET description = $1, "position" = $2
            WHERE id = $3
            "#,
        )
        .bind(&offer.description)
        .bind(&offer.position)
        .bind(key)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &OfferId) -> Result<bool, StoreError> {
        let Some(key) = parse_id(id) else {
            return Ok(false);
        };
        let pool = self.pool().await?;

        let result = sqlx::query("DELETE FROM job_offer WHERE id = $1")
            .bind(key)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// Internal row type for database mapping
#[derive(sqlx::FromRow)]
struct JobOfferRow {
    id: i32,
    description: String,
    position: String,
}

impl From<JobOfferRow> for JobOffer {
    fn from(row: JobOfferRow) -> Self {
        JobOffer {
            id: OfferId::new(row.id.to_string()),
            description: row.description,
            position: row.position,
        }
    }
}
