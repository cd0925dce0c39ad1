use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;

use super::{MovieRepository, RepoResult};
use crate::error::RepositoryError;
use crate::movie::{Movie, MovieFields};
use crate::types::DbId;

#[derive(Debug, Default)]
struct Store {
    last_id: DbId,
    rows: BTreeMap<DbId, Movie>,
}

/// Process-local repository backed by an ordered map.
///
/// Identifiers start at 1 and are never reused, mirroring a BIGSERIAL column.
#[derive(Debug, Default)]
pub struct InMemoryMovieRepository {
    store: RwLock<Store>,
}

impl InMemoryMovieRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.store.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.rows.is_empty()
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn insert(&self, fields: MovieFields) -> RepoResult<Movie> {
        let mut store = self.store.write().await;
        store.last_id += 1;
        let now = Utc::now();
        let movie = Movie {
            id: store.last_id,
            title: fields.title,
            launch_date: fields.launch_date,
            rank: fields.rank,
            revenue: fields.revenue,
            created_at: now,
            updated_at: now,
        };
        store.rows.insert(movie.id, movie.clone());
        Ok(movie)
    }

    async fn find_by_id(&self, id: DbId) -> RepoResult<Option<Movie>> {
        Ok(self.store.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> RepoResult<Vec<Movie>> {
        Ok(self.store.read().await.rows.values().cloned().collect())
    }

    async fn find_by_launch_date_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepoResult<Vec<Movie>> {
        Ok(self
            .store
            .read()
            .await
            .rows
            .values()
            .filter(|m| start <= m.launch_date && m.launch_date <= end)
            .cloned()
            .collect())
    }

    async fn save(&self, mut movie: Movie) -> RepoResult<Movie> {
        let mut store = self.store.write().await;
        let stored = store
            .rows
            .get_mut(&movie.id)
            .ok_or(RepositoryError::Missing(movie.id))?;

        // Identity and creation time come from the stored row, not the caller.
        movie.created_at = stored.created_at;
        movie.updated_at = Utc::now().max(stored.updated_at);
        *stored = movie.clone();
        Ok(movie)
    }

    async fn delete(&self, movie: &Movie) -> RepoResult<()> {
        self.store.write().await.rows.remove(&movie.id);
        Ok(())
    }
}
