/// Movie identifiers: BIGSERIAL values assigned by the store on insert.
pub type DbId = i64;

/// Record timestamps, always UTC and always stamped by the store.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
