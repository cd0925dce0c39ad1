//! Domain core for the movie records service.
//!
//! Holds the record and wire types, the request validator, the error
//! taxonomy, the repository capability and the [`service::MovieService`]
//! that ties them together. Nothing in here knows about HTTP or SQL.

pub mod error;
pub mod movie;
pub mod repository;
pub mod service;
pub mod types;
pub mod validation;
