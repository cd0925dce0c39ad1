//! Repository for the `movies` table.

use async_trait::async_trait;
use chrono::NaiveDate;
use movies_core::error::RepositoryError;
use movies_core::movie::{Movie, MovieFields};
use movies_core::repository::{MovieRepository, RepoResult};
use movies_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::MovieRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, launch_date, rank, revenue, created_at, updated_at";

/// [`MovieRepository`] backed by PostgreSQL.
///
/// Timestamps are stamped by the database: `created_at`/`updated_at` default
/// to `NOW()` on insert and `updated_at` is refreshed on every save.
#[derive(Debug, Clone)]
pub struct PgMovieRepository {
    pool: PgPool,
}

impl PgMovieRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieRepository for PgMovieRepository {
    async fn insert(&self, fields: MovieFields) -> RepoResult<Movie> {
        let query = format!(
            "INSERT INTO movies (title, launch_date, rank, revenue)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, MovieRow>(&query)
            .bind(&fields.title)
            .bind(fields.launch_date)
            .bind(fields.rank)
            .bind(fields.revenue)
            .fetch_one(&self.pool)
            .await
            .map_err(RepositoryError::backend)?;
        tracing::debug!(id = row.id, "Inserted movie");
        Ok(row.into())
    }

    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<Movie>> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        let row = sqlx::query_as::<_, MovieRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(RepositoryError::backend)?;
        Ok(row.map(Movie::from))
    }

    async fn find_all(&self) -> RepoResult<Vec<Movie>> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id");
        let rows = sqlx::query_as::<_, MovieRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(RepositoryError::backend)?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn find_by_launch_date_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepoResult<Vec<Movie>> {
        // BETWEEN is inclusive and, being non-SYMMETRIC, empty for start > end.
        let query = format!(
            "SELECT {COLUMNS} FROM movies
             WHERE launch_date BETWEEN $1 AND $2
             ORDER BY id"
        );
        let rows = sqlx::query_as::<_, MovieRow>(&query)
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await
            .map_err(RepositoryError::backend)?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn save(&self, movie: Movie) -> RepoResult<Movie> {
        let query = format!(
            "UPDATE movies SET
                title = $2,
                launch_date = $3,
                rank = $4,
                revenue = $5,
                updated_at = GREATEST(NOW(), updated_at)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, MovieRow>(&query)
            .bind(movie.id)
            .bind(&movie.title)
            .bind(movie.launch_date)
            .bind(movie.rank)
            .bind(movie.revenue)
            .fetch_optional(&self.pool)
            .await
            .map_err(RepositoryError::backend)?
            .ok_or(RepositoryError::Missing(movie.id))?;
        tracing::debug!(id = row.id, "Updated movie");
        Ok(row.into())
    }

    async fn delete(&self, movie: &Movie) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(movie.id)
            .execute(&self.pool)
            .await
            .map_err(RepositoryError::backend)?;
        tracing::debug!(id = movie.id, rows = result.rows_affected(), "Deleted movie");
        Ok(())
    }

    async fn health_check(&self) -> RepoResult<()> {
        crate::health_check(&self.pool)
            .await
            .map_err(RepositoryError::backend)
    }
}
