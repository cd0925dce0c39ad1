pub mod movie_repo;

pub use movie_repo::PgMovieRepository;
