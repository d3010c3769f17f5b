//! Backend-to-UI events for the viewer window.

use shared::domain::Movie;

pub enum UiEvent {
    /// Outcome of the single movie-list fetch. Errors arrive pre-formatted.
    MoviesFetched(Result<Vec<Movie>, String>),
}
