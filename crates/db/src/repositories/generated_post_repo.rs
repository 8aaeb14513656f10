//! Repository for the `generated_posts` table.

use sqlx::PgPool;

use crate::models::artifact::NewGeneratedPosts;

/// Insert-only access to `generated_posts`.
pub struct GeneratedPostRepo;

impl GeneratedPostRepo {
    /// Append one generation batch. Returns the new row id.
    pub async fn insert(pool: &PgPool, input: &NewGeneratedPosts) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "INSERT INTO generated_posts (subject, posts, metadata) \
             VALUES ($1, $2, $3) \
             RETURNING id",
        )
        .bind(&input.subject)
        .bind(&input.posts)
        .bind(&input.metadata)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }
}
