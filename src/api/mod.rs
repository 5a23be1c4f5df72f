//! API clients for external services

pub mod tmdb;

pub use tmdb::{TmdbClient, TmdbError};
