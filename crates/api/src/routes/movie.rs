//! Route definitions for the `/movies` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::movie;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// GET    /filter                    -> filter_by_launch_date
/// GET    /{id}                      -> get_by_id
/// PUT    /{id}                      -> update
/// DELETE /{id}                      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movie::list).post(movie::create))
        .route("/filter", get(movie::filter_by_launch_date))
        .route(
            "/{id}",
            get(movie::get_by_id)
                .put(movie::update)
                .delete(movie::delete),
        )
}
