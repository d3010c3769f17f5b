//! Viewer state machine and the view model drawn from it.
//!
//! A viewer starts in [`ViewerState::Loading`], fires one fetch when mounted,
//! and settles in either `Loaded` or `Failed`. Nothing moves it afterwards.

use std::fmt;

use shared::domain::{Movie, MovieId};
use tracing::error;

use crate::{CatalogClient, CatalogSource, ViewerConfig};

pub const PAGE_TITLE: &str = "Movie Collection";
pub const LOADING_MESSAGE: &str = "Loading movies...";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch movies";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewerState {
    #[default]
    Loading,
    Loaded(Vec<Movie>),
    Failed(String),
}

impl ViewerState {
    /// Settles a loading state with the fetch outcome. Returns `false` and
    /// leaves the state alone once it has already settled.
    pub fn apply<E: fmt::Display>(&mut self, outcome: Result<Vec<Movie>, E>) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = match outcome {
            Ok(movies) => ViewerState::Loaded(movies),
            Err(err) => {
                error!(error = %err, "error fetching movies");
                ViewerState::Failed(FETCH_FAILED_MESSAGE.to_string())
            }
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewerState::Loading)
    }
}

pub struct Viewer<S> {
    source: S,
    api_url: String,
    state: ViewerState,
    mounted: bool,
}

impl Viewer<CatalogClient> {
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self::new(CatalogClient::new(config), config.base_url())
    }
}

impl<S: CatalogSource> Viewer<S> {
    pub fn new(source: S, api_url: impl Into<String>) -> Self {
        Self {
            source,
            api_url: api_url.into(),
            state: ViewerState::Loading,
            mounted: false,
        }
    }

    /// Issues the single fetch. Later calls return the settled state without
    /// touching the network.
    pub async fn mount(&mut self) -> &ViewerState {
        if !self.mounted {
            self.mounted = true;
            let outcome = self.source.list_movies().await;
            self.state.apply(outcome);
        }
        &self.state
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn view(&self) -> ViewModel {
        ViewModel::new(&self.api_url, &self.state)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub title: &'static str,
    pub api_url: String,
    pub body: ViewBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewBody {
    Loading(&'static str),
    Error(String),
    Grid { header: String, cards: Vec<MovieCard> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieCard {
    pub key: MovieId,
    pub title: String,
    pub year: i32,
    pub director: String,
    pub genre: String,
}

impl MovieCard {
    pub fn details(&self) -> [(&'static str, String); 3] {
        [
            ("Year", self.year.to_string()),
            ("Director", self.director.clone()),
            ("Genre", self.genre.clone()),
        ]
    }
}

impl From<&Movie> for MovieCard {
    fn from(movie: &Movie) -> Self {
        Self {
            key: movie.id,
            title: movie.title.clone(),
            year: movie.year,
            director: movie.director.clone(),
            genre: movie.genre.clone(),
        }
    }
}

impl ViewModel {
    pub fn new(api_url: &str, state: &ViewerState) -> Self {
        let body = match state {
            ViewerState::Loading => ViewBody::Loading(LOADING_MESSAGE),
            ViewerState::Failed(message) => ViewBody::Error(format!("Error: {message}")),
            ViewerState::Loaded(movies) => ViewBody::Grid {
                header: format!("Movies ({})", movies.len()),
                cards: movies.iter().map(MovieCard::from).collect(),
            },
        };
        Self {
            title: PAGE_TITLE,
            api_url: api_url.to_string(),
            body,
        }
    }

    pub fn cards(&self) -> &[MovieCard] {
        match &self.body {
            ViewBody::Grid { cards, .. } => cards.as_slice(),
            _ => &[],
        }
    }
}

impl fmt::Display for ViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "API URL: {}", self.api_url)?;
        writeln!(f)?;
        match &self.body {
            ViewBody::Loading(message) => writeln!(f, "{message}"),
            ViewBody::Error(message) => writeln!(f, "{message}"),
            ViewBody::Grid { header, cards } => {
                writeln!(f, "{header}")?;
                for card in cards {
                    writeln!(f)?;
                    writeln!(f, "  {}", card.title)?;
                    for (label, value) in card.details() {
                        writeln!(f, "    {label}: {value}")?;
                    }
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/viewer_tests.rs"]
mod tests;
