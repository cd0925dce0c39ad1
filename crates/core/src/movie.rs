//! Movie record, write request, read response and the mappings between them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{DbId, Timestamp};

/// Entity name used in not-found messages.
pub const ENTITY: &str = "Movie";

/// A stored movie. `id`, `created_at` and `updated_at` are owned by the
/// repository and never computed by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub launch_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub rank: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub revenue: Decimal,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Caller-supplied fields for create and update, before validation.
///
/// Every field is optional on the wire so that absence is reported as a
/// field violation rather than a deserialization failure. Rank and revenue
/// are read as exact decimals, never through `f64`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MovieRequest {
    #[validate(
        required(message = "must not be blank", code = "not_blank"),
        custom(function = "crate::validation::not_blank")
    )]
    pub title: Option<String>,

    #[validate(required(message = "must not be null"))]
    pub launch_date: Option<NaiveDate>,

    #[validate(
        required(message = "must not be null"),
        custom(function = "crate::validation::rank_in_range")
    )]
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub rank: Option<Decimal>,

    #[validate(
        required(message = "must not be null"),
        custom(function = "crate::validation::non_negative")
    )]
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub revenue: Option<Decimal>,
}

impl MovieRequest {
    /// Build a request with every field present.
    pub fn new(
        title: impl Into<String>,
        launch_date: NaiveDate,
        rank: Decimal,
        revenue: Decimal,
    ) -> Self {
        Self {
            title: Some(title.into()),
            launch_date: Some(launch_date),
            rank: Some(rank),
            revenue: Some(revenue),
        }
    }

    /// The business fields, if all four are present. Does not check ranges.
    pub(crate) fn to_fields(&self) -> Option<MovieFields> {
        Some(MovieFields {
            title: self.title.clone()?,
            launch_date: self.launch_date?,
            rank: self.rank?,
            revenue: self.revenue?,
        })
    }
}

/// The four business fields of a movie after validation.
///
/// This is what the repository receives on insert; id and timestamps are
/// left for the store to assign.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieFields {
    pub title: String,
    pub launch_date: NaiveDate,
    pub rank: Decimal,
    pub revenue: Decimal,
}

impl MovieFields {
    /// Overwrite the business fields of an existing record. Identifier and
    /// timestamps are left untouched.
    pub fn apply_to(self, movie: &mut Movie) {
        movie.title = self.title;
        movie.launch_date = self.launch_date;
        movie.rank = self.rank;
        movie.revenue = self.revenue;
    }
}

/// Read-side view of a movie: the business fields only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieResponse {
    pub title: String,
    pub launch_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub rank: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub revenue: Decimal,
}

impl From<&Movie> for MovieResponse {
    fn from(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            launch_date: movie.launch_date,
            rank: movie.rank,
            revenue: movie.revenue,
        }
    }
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        Self {
            title: movie.title,
            launch_date: movie.launch_date,
            rank: movie.rank,
            revenue: movie.revenue,
        }
    }
}
