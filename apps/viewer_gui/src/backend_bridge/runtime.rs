//! Worker thread that owns the tokio runtime and performs the fetch.

use std::thread;

use client_core::{CatalogClient, CatalogSource};
use crossbeam_channel::Sender;

use crate::controller::events::UiEvent;

pub fn spawn_fetch_worker(client: CatalogClient, ui_tx: Sender<UiEvent>, repaint: egui::Context) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.send(UiEvent::MoviesFetched(Err(format!(
                    "failed to build runtime: {err}"
                ))));
                repaint.request_repaint();
                return;
            }
        };

        tracing::debug!(api_url = client.server_url(), "fetching movies");
        let outcome = runtime
            .block_on(client.list_movies())
            .map_err(|err| format!("{err:#}"));
        if ui_tx.send(UiEvent::MoviesFetched(outcome)).is_err() {
            tracing::debug!("viewer window closed before fetch completed");
        }
        repaint.request_repaint();
    });
}
