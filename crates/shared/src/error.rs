use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{domain::MovieId, protocol::MOVIE_NOT_FOUND};

/// JSON error body returned alongside non-2xx statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    pub fn movie_not_found() -> Self {
        Self::new(MOVIE_NOT_FOUND)
    }
}

/// Violations of the catalog data-model invariants, found while building it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("movie id {0} is not positive")]
    NonPositiveId(MovieId),
    #[error("movie id {0} appears more than once")]
    DuplicateId(MovieId),
    #[error("movie {id} has an empty {field}")]
    EmptyField { id: MovieId, field: &'static str },
    #[error("movie {id} has year {year}, expected four digits")]
    InvalidYear { id: MovieId, year: i32 },
}
