use std::time::Duration;

use client_core::{MovieCard, ViewBody, ViewModel, ViewerState};
use crossbeam_channel::Receiver;
use eframe::egui;

use crate::controller::events::UiEvent;

const CARD_WIDTH: f32 = 260.0;
const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(0xd9, 0x3f, 0x3f);

pub struct ViewerApp {
    ui_rx: Receiver<UiEvent>,
    api_url: String,
    state: ViewerState,
}

impl ViewerApp {
    pub fn new(ui_rx: Receiver<UiEvent>, api_url: impl Into<String>) -> Self {
        Self {
            ui_rx,
            api_url: api_url.into(),
            state: ViewerState::Loading,
        }
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::MoviesFetched(outcome) => {
                    if !self.state.apply(outcome) {
                        tracing::warn!("ignoring movie list after state already settled");
                    }
                }
            }
        }
    }

    fn show_page(&self, ctx: &egui::Context) {
        let view = ViewModel::new(&self.api_url, &self.state);

        egui::TopBottomPanel::top("page_header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading(view.title);
            ui.label(format!("API URL: {}", view.api_url));
            ui.add_space(8.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| match &view.body {
            ViewBody::Loading(message) => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(*message);
                });
            }
            ViewBody::Error(message) => {
                ui.colored_label(ERROR_COLOR, message);
            }
            ViewBody::Grid { header, cards } => {
                ui.heading(header);
                ui.add_space(8.0);
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        for card in cards {
                            ui.push_id(card.key.0, |ui| movie_card(ui, card));
                        }
                    });
                });
            }
        });
    }
}

fn movie_card(ui: &mut egui::Ui, card: &MovieCard) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(&card.title).strong().size(16.0));
            for (label, value) in card.details() {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(format!("{label}:")).strong());
                    ui.label(value);
                });
            }
        });
    });
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.show_page(ctx);

        if self.state().is_loading() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
