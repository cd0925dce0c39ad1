//! Movie service: validation, mapping and repository orchestration for the
//! six movie operations.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::error::{CoreError, CoreResult, RepositoryError};
use crate::movie::{Movie, MovieRequest, MovieResponse, ENTITY};
use crate::repository::MovieRepository;
use crate::types::DbId;
use crate::validation::validate_request;

/// Business operations over movie records.
///
/// Holds no mutable state of its own; share it across requests behind an
/// `Arc`. Concurrent writes to the same id are arbitrated by the repository.
#[derive(Clone)]
pub struct MovieService {
    repo: Arc<dyn MovieRepository>,
}

impl MovieService {
    pub fn new(repo: Arc<dyn MovieRepository>) -> Self {
        Self { repo }
    }

    /// Validate and insert a new movie, returning the stored record.
    pub async fn create(&self, request: MovieRequest) -> CoreResult<Movie> {
        let fields = validate_request(&request).map_err(CoreError::Validation)?;
        Ok(self.repo.insert(fields).await?)
    }

    /// Every movie, in repository order.
    pub async fn find_all(&self) -> CoreResult<Vec<MovieResponse>> {
        let movies = self.repo.find_all().await?;
        Ok(movies.into_iter().map(MovieResponse::from).collect())
    }

    pub async fn find_by_id(&self, id: DbId) -> CoreResult<MovieResponse> {
        self.repo
            .find_by_id(id)
            .await?
            .map(MovieResponse::from)
            .ok_or(CoreError::NotFoundById { entity: ENTITY, id })
    }

    /// Movies launched between `start` and `end`, both inclusive.
    ///
    /// The bounds are not checked against each other; an inverted range
    /// returns an empty list.
    pub async fn find_by_launch_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> CoreResult<Vec<MovieResponse>> {
        let movies = self.repo.find_by_launch_date_between(start, end).await?;
        Ok(movies.into_iter().map(MovieResponse::from).collect())
    }

    /// Overwrite the business fields of movie `id`.
    ///
    /// Not-found here uses the bare message without the id.
    pub async fn update(&self, id: DbId, request: MovieRequest) -> CoreResult<Movie> {
        let fields = validate_request(&request).map_err(CoreError::Validation)?;

        let mut movie = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY })?;
        fields.apply_to(&mut movie);

        match self.repo.save(movie).await {
            Ok(saved) => Ok(saved),
            Err(RepositoryError::Missing(_)) => Err(CoreError::NotFound { entity: ENTITY }),
            Err(err) => Err(err.into()),
        }
    }

    /// Remove movie `id`. Deleting an absent id is a not-found error.
    pub async fn delete(&self, id: DbId) -> CoreResult<()> {
        let movie = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY })?;
        self.repo.delete(&movie).await?;
        Ok(())
    }

    /// Probe the backing store.
    pub async fn health_check(&self) -> CoreResult<()> {
        Ok(self.repo.health_check().await?)
    }
}
