use std::sync::Arc;

use shared::{
    domain::Movie,
    error::ErrorBody,
    protocol::StatusResponse,
};

use crate::catalog::{parse_movie_id, Catalog};

#[derive(Clone)]
pub struct ApiContext {
    pub catalog: Arc<Catalog>,
}

impl ApiContext {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

pub fn status() -> StatusResponse {
    StatusResponse::running()
}

pub fn list_movies(ctx: &ApiContext) -> Vec<Movie> {
    ctx.catalog.all().to_vec()
}

/// Looks up a movie from the raw path segment. A segment that does not parse
/// and an id that matches nothing produce the same error.
pub fn get_movie(ctx: &ApiContext, raw_id: &str) -> Result<Movie, ErrorBody> {
    parse_movie_id(raw_id)
        .and_then(|id| ctx.catalog.find(id))
        .cloned()
        .ok_or_else(ErrorBody::movie_not_found)
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
