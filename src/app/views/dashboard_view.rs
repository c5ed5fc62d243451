use eframe::egui;

use crate::app::api::ApiClient;
use crate::app::dashboard::DashboardState;
use crate::app::state::AppState;
use crate::app::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let api = state.session.api().clone();
    let dashboard = &mut state.dashboard;

    // First load: nothing cached yet, show only the indicator.
    if dashboard.loading && dashboard.users.is_empty() && dashboard.events.is_empty() {
        ui.vertical_centered(|ui| {
            let top_space = (ui.available_height() - 60.0).max(0.0) / 2.0;
            ui.add_space(top_space);
            ui.spinner();
            ui.add_space(8.0);
            ui.colored_label(colors::GRAY_DARK, "Cargando datos del dashboard...");
        });
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.add_space(16.0);

        ui.vertical_centered(|ui| {
            ui.set_max_width(1100.0);

            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("¡Bienvenido!")
                        .size(28.0)
                        .strong()
                        .color(colors::PRIMARY),
                );
                if dashboard.loading || dashboard.busy {
                    ui.spinner();
                }
            });
            ui.add_space(8.0);

            if let Some(ref error) = dashboard.error {
                ui.label(egui::RichText::new(error).color(colors::DANGER));
                ui.add_space(8.0);
            }
            if let Some(ref notice) = dashboard.notice {
                ui.label(egui::RichText::new(notice).color(colors::SUCCESS));
                ui.add_space(8.0);
            }

            ui.columns(2, |columns| {
                render_create_form(&mut columns[0], dashboard, &api);
                render_event_list(&mut columns[1], dashboard);
            });

            ui.add_space(16.0);
            render_users_section(ui, dashboard);
            ui.add_space(16.0);
        });
    });

    render_delete_confirmation(ui.ctx(), dashboard, &api);
}

fn render_create_form(
    ui: &mut egui::Ui,
    dashboard: &mut DashboardState,
    api: &ApiClient,
) {
    styles::card_frame().show(ui, |ui| {
        ui.label(
            egui::RichText::new("Crear Nuevo Evento")
                .size(20.0)
                .strong()
                .color(colors::BLACK),
        );
        ui.add_space(12.0);

        ui.add(
            egui::TextEdit::singleline(&mut dashboard.event_name_input)
                .hint_text("Nombre del Evento *")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);
        ui.add(
            egui::TextEdit::singleline(&mut dashboard.event_schedule_input)
                .hint_text("Horario (ej. 19:00 - 21:00) *")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);
        ui.add(
            egui::TextEdit::singleline(&mut dashboard.event_address_input)
                .hint_text("Dirección (Opcional)")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(12.0);

        let create = egui::Button::new(egui::RichText::new("Crear Evento").color(colors::WHITE))
            .fill(colors::PRIMARY);
        if ui.add_sized([ui.available_width(), 32.0], create).clicked() && !dashboard.busy {
            dashboard.handle_create_event(api);
        }
    });
}

fn render_event_list(ui: &mut egui::Ui, dashboard: &mut DashboardState) {
    styles::card_frame().show(ui, |ui| {
        ui.label(
            egui::RichText::new("Eventos")
                .size(20.0)
                .strong()
                .color(colors::BLACK),
        );
        ui.add_space(12.0);

        if dashboard.events.is_empty() {
            ui.colored_label(colors::GRAY_DARK, "No hay eventos");
            return;
        }

        let mut delete_requested: Option<String> = None;

        egui::ScrollArea::vertical()
            .max_height(420.0)
            .show(ui, |ui| {
                for event in &dashboard.events {
                    styles::item_frame().show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.vertical(|ui| {
                                ui.label(
                                    egui::RichText::new(&event.name)
                                        .size(16.0)
                                        .strong()
                                        .color(colors::BLACK),
                                );
                                ui.colored_label(
                                    colors::GRAY_DARK,
                                    format!("Horario: {}", event.schedule),
                                );
                                if let Some(ref address) = event.address {
                                    ui.colored_label(
                                        colors::GRAY_DARK,
                                        egui::RichText::new(format!("Dirección: {}", address))
                                            .italics(),
                                    );
                                }
                            });

                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Min),
                                |ui| {
                                    let delete = egui::Button::new(
                                        egui::RichText::new("X").color(colors::DANGER).strong(),
                                    );
                                    if ui.add(delete).clicked() {
                                        delete_requested = Some(event.id.clone());
                                    }
                                },
                            );
                        });
                    });
                    ui.add_space(6.0);
                }
            });

        if let Some(id) = delete_requested {
            dashboard.request_delete(id);
        }
    });
}

fn render_users_section(ui: &mut egui::Ui, dashboard: &mut DashboardState) {
    let toggle_label = if dashboard.show_users {
        "Ocultar Usuarios"
    } else {
        "Mostrar Usuarios"
    };
    let toggle = egui::Button::new(egui::RichText::new(toggle_label).color(colors::WHITE))
        .fill(colors::SECONDARY);
    if ui.add_sized([200.0, 32.0], toggle).clicked() {
        dashboard.show_users = !dashboard.show_users;
    }

    if !dashboard.show_users {
        return;
    }

    ui.add_space(8.0);
    styles::card_frame().show(ui, |ui| {
        ui.label(
            egui::RichText::new("Usuarios")
                .size(20.0)
                .strong()
                .color(colors::BLACK),
        );
        ui.add_space(12.0);

        if dashboard.users.is_empty() {
            ui.colored_label(colors::GRAY_DARK, "No hay usuarios");
            return;
        }

        for user in &dashboard.users {
            styles::item_frame().show(ui, |ui| {
                ui.label(
                    egui::RichText::new(&user.username)
                        .size(16.0)
                        .strong()
                        .color(colors::BLACK),
                );
                ui.colored_label(colors::GRAY_DARK, format!("Email: {}", user.gmail));
            });
            ui.add_space(6.0);
        }
    });
}

/// Centered modal-style confirmation; only an explicit confirm sends
/// the delete request.
fn render_delete_confirmation(
    ctx: &egui::Context,
    dashboard: &mut DashboardState,
    api: &ApiClient,
) {
    if dashboard.pending_delete.is_none() {
        return;
    }

    egui::Window::new("Confirmar Eliminación")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("¿Estás seguro de que quieres eliminar este evento?");
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                if ui.button("Cancelar").clicked() {
                    dashboard.cancel_delete();
                }

                let confirm =
                    egui::Button::new(egui::RichText::new("Eliminar").color(colors::WHITE))
                        .fill(colors::DANGER);
                if ui.add(confirm).clicked() {
                    dashboard.confirm_delete(api);
                }
            });
        });
}
