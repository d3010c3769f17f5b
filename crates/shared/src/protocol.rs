use serde::{Deserialize, Serialize};

pub const STATUS_MESSAGE: &str = "Movie API is running!";
pub const MOVIE_NOT_FOUND: &str = "Movie not found";

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub message: String,
}

impl StatusResponse {
    pub fn running() -> Self {
        Self {
            message: STATUS_MESSAGE.to_string(),
        }
    }
}

pub fn movies_route() -> &'static str {
    "/movies"
}

pub fn movie_route(id: impl std::fmt::Display) -> String {
    format!("/movies/{id}")
}
