//! Repository capability the movie service depends on.
//!
//! The store owns identifiers and timestamps: `insert` assigns `id`,
//! `created_at` and `updated_at`; `save` refreshes `updated_at` and must
//! never change `id` or `created_at`.

mod memory;

pub use memory::InMemoryMovieRepository;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::RepositoryError;
use crate::movie::{Movie, MovieFields};
use crate::types::DbId;

/// Result alias for repository calls.
pub type RepoResult<T> = Result<T, RepositoryError>;

/// Durable CRUD and range-query operations over movie records.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Persist a new record, returning it with store-assigned id and timestamps.
    async fn insert(&self, fields: MovieFields) -> RepoResult<Movie>;

    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<Movie>>;

    /// All records, ordered by id.
    async fn find_all(&self) -> RepoResult<Vec<Movie>>;

    /// Records with `start <= launch_date <= end`, ordered by id.
    ///
    /// An inverted range (`start > end`) matches nothing.
    async fn find_by_launch_date_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepoResult<Vec<Movie>>;

    /// Write back an existing record and refresh its `updated_at`.
    ///
    /// Returns [`RepositoryError::Missing`] if the row no longer exists.
    async fn save(&self, movie: Movie) -> RepoResult<Movie>;

    async fn delete(&self, movie: &Movie) -> RepoResult<()>;

    /// Cheap liveness probe of the backing store.
    async fn health_check(&self) -> RepoResult<()> {
        Ok(())
    }
}
