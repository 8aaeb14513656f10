//! Repository for the `generated_videos` table.

use sqlx::PgPool;

use crate::models::artifact::NewGeneratedVideo;

/// Insert-only access to `generated_videos`.
pub struct GeneratedVideoRepo;

impl GeneratedVideoRepo {
    /// Append one video artifact. Returns the new row id.
    pub async fn insert(pool: &PgPool, input: &NewGeneratedVideo) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "INSERT INTO generated_videos (prompt, script, metadata) \
             VALUES ($1, $2, $3) \
             RETURNING id",
        )
        .bind(&input.prompt)
        .bind(&input.script)
        .bind(&input.metadata)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }
}
