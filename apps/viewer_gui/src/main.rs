mod backend_bridge;
mod controller;
mod ui;

use client_core::{CatalogClient, ViewerConfig};
use crossbeam_channel::bounded;
use eframe::egui;

use backend_bridge::runtime::spawn_fetch_worker;
use controller::events::UiEvent;
use ui::ViewerApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let config = match ViewerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "invalid viewer configuration");
            eprintln!("Error: {err}");
            std::process::exit(2);
        }
    };

    let (ui_tx, ui_rx) = bounded::<UiEvent>(4);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Movie Collection")
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([320.0, 240.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Movie Collection",
        options,
        Box::new(move |cc| {
            spawn_fetch_worker(CatalogClient::new(&config), ui_tx, cc.egui_ctx.clone());
            Ok(Box::new(ViewerApp::new(ui_rx, config.base_url())))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_core::{viewer::FETCH_FAILED_MESSAGE, ViewerState};
    use shared::domain::Movie;

    #[test]
    fn fetched_movies_settle_the_window_state() {
        let (ui_tx, ui_rx) = bounded::<UiEvent>(4);
        let mut app = ViewerApp::new(ui_rx, "http://localhost:3000");
        assert!(app.state().is_loading());

        let movies = vec![Movie::new(2, "The Godfather", 1972, "Francis Ford Coppola", "Crime")];
        ui_tx
            .send(UiEvent::MoviesFetched(Ok(movies.clone())))
            .expect("send");
        app.process_ui_events();
        assert_eq!(app.state(), &ViewerState::Loaded(movies));
    }

    #[test]
    fn fetch_error_shows_generic_failure_and_ignores_later_events() {
        let (ui_tx, ui_rx) = bounded::<UiEvent>(4);
        let mut app = ViewerApp::new(ui_rx, "http://localhost:3000");

        ui_tx
            .send(UiEvent::MoviesFetched(Err("connection refused".into())))
            .expect("send");
        ui_tx
            .send(UiEvent::MoviesFetched(Ok(Vec::new())))
            .expect("send");
        app.process_ui_events();
        assert_eq!(
            app.state(),
            &ViewerState::Failed(FETCH_FAILED_MESSAGE.to_string())
        );
    }
}
