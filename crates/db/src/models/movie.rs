//! Row mapping for the `movies` table.

use chrono::NaiveDate;
use movies_core::movie::Movie;
use movies_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// A row from the `movies` table.
#[derive(Debug, Clone, FromRow)]
pub struct MovieRow {
    pub id: DbId,
    pub title: String,
    pub launch_date: NaiveDate,
    pub rank: Decimal,
    pub revenue: Decimal,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            launch_date: row.launch_date,
            rank: row.rank,
            revenue: row.revenue,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
