//! Repository for the `generated_images` table.

use sqlx::PgPool;

use crate::models::artifact::NewGeneratedImage;

/// Insert-only access to `generated_images`.
pub struct GeneratedImageRepo;

impl GeneratedImageRepo {
    /// Append one image artifact. Returns the new row id.
    pub async fn insert(pool: &PgPool, input: &NewGeneratedImage) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "INSERT INTO generated_images (prompt, description, metadata) \
             VALUES ($1, $2, $3) \
             RETURNING id",
        )
        .bind(&input.prompt)
        .bind(&input.description)
        .bind(&input.metadata)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }
}
