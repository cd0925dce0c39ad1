//! Handlers for the `/movies` resource.
//!
//! Extractor rejections are taken as `Result` so malformed input is rendered
//! through the same error envelope as domain failures.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use movies_core::movie::{Movie, MovieRequest, MovieResponse};
use movies_core::types::DbId;

use crate::error::AppResult;
use crate::query::DateRangeParams;
use crate::state::AppState;

/// Body returned by a successful delete.
pub const DELETED_MESSAGE: &str = "Movie deleted successfully.";

/// POST /api/v1/movies
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<MovieRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    let Json(input) = payload?;
    let movie = state.movies.create(input).await?;
    tracing::info!(id = movie.id, title = %movie.title, "Movie created");
    Ok((StatusCode::CREATED, Json(movie)))
}

/// GET /api/v1/movies
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MovieResponse>>> {
    let movies = state.movies.find_all().await?;
    Ok(Json(movies))
}

/// GET /api/v1/movies/filter?startDate=&endDate=
pub async fn filter_by_launch_date(
    State(state): State<AppState>,
    params: Result<Query<DateRangeParams>, QueryRejection>,
) -> AppResult<Json<Vec<MovieResponse>>> {
    let Query(range) = params?;
    let movies = state
        .movies
        .find_by_launch_date_range(range.start_date, range.end_date)
        .await?;
    Ok(Json(movies))
}

/// GET /api/v1/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<MovieResponse>> {
    let Path(id) = id?;
    let movie = state.movies.find_by_id(id).await?;
    Ok(Json(movie))
}

/// PUT /api/v1/movies/{id}
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<MovieRequest>, JsonRejection>,
) -> AppResult<Json<Movie>> {
    let Path(id) = id?;
    let Json(input) = payload?;
    let movie = state.movies.update(id, input).await?;
    tracing::info!(id, "Movie updated");
    Ok(Json(movie))
}

/// DELETE /api/v1/movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<(StatusCode, &'static str)> {
    let Path(id) = id?;
    state.movies.delete(id).await?;
    tracing::info!(id, "Movie deleted");
    Ok((StatusCode::OK, DELETED_MESSAGE))
}
