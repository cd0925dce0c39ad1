use crate::types::DbId;
use crate::validation::FieldViolation;

/// Boxed error raised by a storage backend.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure reported by a [`MovieRepository`](crate::repository::MovieRepository)
/// implementation.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The row was removed between being read and being written.
    #[error("Record with id {0} no longer exists")]
    Missing(DbId),

    /// Any failure of the underlying store (connection, query, decoding).
    #[error(transparent)]
    Backend(BoxError),
}

impl RepositoryError {
    /// Wrap a backend-specific error.
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend(Box::new(err))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Lookup by identifier on the read path. The message carries the id.
    #[error("{entity} not found with id: {id}")]
    NotFoundById { entity: &'static str, id: DbId },

    /// Lookup on the update and delete paths. The message omits the id.
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    /// One or more fields of a write request failed validation.
    #[error("Validation failed")]
    Validation(Vec<FieldViolation>),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl CoreError {
    /// Whether this is either of the not-found variants.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFoundById { .. } | Self::NotFound { .. })
    }
}

/// Convenience alias for fallible core operations.
pub type CoreResult<T> = Result<T, CoreError>;
