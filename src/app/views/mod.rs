use eframe::egui;

use crate::app::session::SessionPhase;
use crate::app::state::AppState;
use crate::app::theme::{colors, styles};

pub mod auth_view;
pub mod dashboard_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::WHITE,
                    egui::RichText::new("📅 EventDesk").size(18.0).strong(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);

                    if state.session.is_authenticated() {
                        if ui.button("Cerrar Sesión").clicked() {
                            state.logout();
                        }

                        if let Some(ts) = state.dashboard.last_refreshed {
                            ui.colored_label(
                                colors::GRAY_MEDIUM,
                                format!("Actualizado a las {}", ts.format("%H:%M:%S")),
                            );
                        }
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::GRAY_LIGHT)
        .inner_margin(egui::Margin::same(0));

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match state.session.phase() {
            SessionPhase::Initializing => render_loading(ui),
            SessionPhase::Anonymous => auth_view::render(ui, state),
            SessionPhase::Authenticated => dashboard_view::render(ui, state),
        });
}

/// Shown while the startup vault read is in flight.
fn render_loading(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        let top_space = (ui.available_height() - 60.0).max(0.0) / 2.0;
        ui.add_space(top_space);
        ui.spinner();
        ui.add_space(8.0);
        ui.colored_label(colors::GRAY_DARK, "Cargando...");
    });
}
