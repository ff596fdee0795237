//! Read-only HTTP service for the roster collections.
//!
//! The data is compiled into the binary by `roster-gen`; requests never touch
//! the filesystem.
//!
//! ## API
//! - `GET /people`
//! - `GET /teams`

pub mod generated;
pub mod routes;

pub use routes::router;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("logging error: {0}")]
    Logging(String),
}
