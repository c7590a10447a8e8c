use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;

pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect(database_url)
        .await
}

/// Renames `job_position` to `position` on the `job_offer` table this pool
/// resolves, leaving same-named tables in other schemas alone
const RENAME_JOB_POSITION: &str = r#"
    DO $$
    BEGIN
        IF EXISTS (
            SELECT 1 FROM information_schema.columns
            WHERE table_schema = current_schema()
              AND table_name = 'job_offer'
              AND column_name = 'job_position'
        ) THEN
            ALTER TABLE job_offer RENAME COLUMN job_position TO "position";
        END IF;
    END
    $$
"#;

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    // Create job_offer table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS job_offer (
            id SERIAL PRIMARY KEY,
            description TEXT NOT NULL,
            "position" VARCHAR(100) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Older deployments named the column job_position
    sqlx::query(RENAME_JOB_POSITION).execute(pool).await?;

    tracing::info!("Database migrations completed successfully");
    Ok(())
}
