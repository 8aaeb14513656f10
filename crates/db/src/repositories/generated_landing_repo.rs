//! Repository for the `generated_landings` table.

use sqlx::PgPool;

use crate::models::artifact::NewGeneratedLanding;

/// Insert-only access to `generated_landings`.
pub struct GeneratedLandingRepo;

impl GeneratedLandingRepo {
    /// Append one landing page artifact. Returns the new row id.
    pub async fn insert(pool: &PgPool, input: &NewGeneratedLanding) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "INSERT INTO generated_landings (briefing, landing_data, metadata) \
             VALUES ($1, $2, $3) \
             RETURNING id",
        )
        .bind(&input.briefing)
        .bind(&input.landing_data)
        .bind(&input.metadata)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }
}
