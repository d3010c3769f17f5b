use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shared::{
    domain::{Movie, MovieId},
    protocol::{movie_route, movies_route, StatusResponse},
};

pub mod config;
pub mod viewer;

pub use config::{ConfigError, ViewerConfig};
pub use viewer::{MovieCard, ViewBody, ViewModel, Viewer, ViewerState};

/// Something the viewer can load its movie list from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn list_movies(&self) -> Result<Vec<Movie>>;
}

/// HTTP client for the catalog service.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    server_url: String,
}

impl CatalogClient {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            http: Client::new(),
            server_url: config.base_url().to_string(),
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub async fn status(&self) -> Result<StatusResponse> {
        let status = self
            .http
            .get(format!("{}/", self.server_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("decoding status response")?;
        Ok(status)
    }

    pub async fn get_movie(&self, id: MovieId) -> Result<Option<Movie>> {
        let response = self
            .http
            .get(format!("{}{}", self.server_url, movie_route(id)))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let movie = response
            .error_for_status()?
            .json()
            .await
            .with_context(|| format!("decoding movie {id}"))?;
        Ok(Some(movie))
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn list_movies(&self) -> Result<Vec<Movie>> {
        let movies = self
            .http
            .get(format!("{}{}", self.server_url, movies_route()))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("decoding movie list")?;
        Ok(movies)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
