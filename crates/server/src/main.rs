use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use shared::{domain::Movie, error::ErrorBody, protocol::StatusResponse};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

mod api;
mod app_state;
mod catalog;
mod config;

use api::ApiContext;
use app_state::AppState;
use catalog::Catalog;
use config::load_settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .init();

    let settings = load_settings()?;
    let catalog = Catalog::seeded()?;
    info!(movies = catalog.len(), "catalog loaded");

    let state = AppState {
        api: ApiContext::new(catalog),
    };
    let app = build_router(Arc::new(state));

    let addr = settings.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, port = settings.port, "movie API server running");
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(http_status))
        .route("/movies", get(http_list_movies))
        .route("/movies/", get(http_list_movies))
        .route("/movies/:id", get(http_get_movie))
        .route("/movies/:id/", get(http_get_movie))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn http_status() -> Json<StatusResponse> {
    Json(api::status())
}

async fn http_list_movies(State(state): State<Arc<AppState>>) -> Json<Vec<Movie>> {
    Json(api::list_movies(&state.api))
}

async fn http_get_movie(
    State(state): State<Arc<AppState>>,
    raw_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Movie>, (StatusCode, Json<ErrorBody>)> {
    // An undecodable segment cannot name a movie either.
    let Ok(Path(raw_id)) = raw_id else {
        return Err((StatusCode::NOT_FOUND, Json(ErrorBody::movie_not_found())));
    };
    let movie =
        api::get_movie(&state.api, &raw_id).map_err(|e| (StatusCode::NOT_FOUND, Json(e)))?;
    Ok(Json(movie))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
