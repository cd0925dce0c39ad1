use movies_core::service::MovieService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the service only holds an `Arc` to its repository.
#[derive(Clone)]
pub struct AppState {
    /// Movie operations over the configured repository.
    pub movies: MovieService,
}
