use eframe::egui;

use crate::app::state::AppState;
use crate::app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            // Center the form vertically
            let total_height = if state.is_register_mode { 360.0 } else { 280.0 };
            let top_space = (available_rect.height() - total_height).max(0.0) / 2.0;
            ui.add_space(top_space);

            ui.label(
                egui::RichText::new("📅 EventDesk")
                    .size(32.0)
                    .strong()
                    .color(colors::PRIMARY),
            );
            ui.add_space(20.0);

            ui.label(
                egui::RichText::new(if state.is_register_mode {
                    "Crear Cuenta"
                } else {
                    "Iniciar Sesión"
                })
                .size(24.0)
                .color(colors::BLACK),
            );
            ui.add_space(20.0);

            if let Some(ref error) = state.auth_error {
                ui.label(egui::RichText::new(error).color(colors::DANGER));
                ui.add_space(10.0);
            }

            let input_width = 280.0;
            let label_width = 110.0;
            let row_space = (available_rect.width() - input_width - label_width - 20.0) / 2.0;

            // Username field
            ui.horizontal(|ui| {
                ui.add_space(row_space);
                ui.add_sized(
                    [label_width, 24.0],
                    egui::Label::new(
                        egui::RichText::new("Nombre usuario:").color(colors::GRAY_DARK),
                    ),
                );
                ui.add_sized(
                    [input_width, 28.0],
                    egui::TextEdit::singleline(&mut state.username_input),
                );
            });
            ui.add_space(8.0);

            // Email field only when registering
            if state.is_register_mode {
                ui.horizontal(|ui| {
                    ui.add_space(row_space);
                    ui.add_sized(
                        [label_width, 24.0],
                        egui::Label::new(egui::RichText::new("Email:").color(colors::GRAY_DARK)),
                    );
                    ui.add_sized(
                        [input_width, 28.0],
                        egui::TextEdit::singleline(&mut state.gmail_input),
                    );
                });
                ui.add_space(8.0);
            }

            // Password field
            ui.horizontal(|ui| {
                ui.add_space(row_space);
                ui.add_sized(
                    [label_width, 24.0],
                    egui::Label::new(egui::RichText::new("Contraseña:").color(colors::GRAY_DARK)),
                );
                ui.add_sized(
                    [input_width, 28.0],
                    egui::TextEdit::singleline(&mut state.password_input).password(true),
                );
            });
            ui.add_space(8.0);

            if state.is_register_mode {
                ui.horizontal(|ui| {
                    ui.add_space(row_space);
                    ui.add_sized(
                        [label_width, 24.0],
                        egui::Label::new(
                            egui::RichText::new("Nacimiento:").color(colors::GRAY_DARK),
                        ),
                    );
                    ui.add_sized(
                        [input_width, 28.0],
                        egui::TextEdit::singleline(&mut state.birthday_input)
                            .hint_text("AAAA-MM-DD"),
                    );
                });
                ui.add_space(8.0);
            }

            ui.add_space(20.0);

            ui.horizontal(|ui| {
                let button_width = 140.0;
                let total_buttons_width = button_width * 2.0 + 10.0;
                ui.add_space((available_rect.width() - total_buttons_width) / 2.0);

                let submit = egui::Button::new(
                    egui::RichText::new(if state.is_register_mode {
                        "Registrarse"
                    } else {
                        "Entrar"
                    })
                    .color(colors::WHITE),
                )
                .fill(colors::PRIMARY);

                if ui.add_sized([button_width, 32.0], submit).clicked() && !state.auth_loading {
                    if state.is_register_mode {
                        state.handle_register();
                    } else {
                        state.handle_login();
                    }
                }

                ui.add_space(10.0);

                let toggle_label = if state.is_register_mode {
                    "¿Ya tienes cuenta?"
                } else {
                    "Regístrate aquí"
                };
                if ui
                    .add_sized(
                        [button_width, 32.0],
                        egui::Button::new(egui::RichText::new(toggle_label).color(colors::GRAY_DARK)),
                    )
                    .clicked()
                {
                    state.toggle_auth_mode();
                }
            });

            if state.auth_loading {
                ui.add_space(15.0);
                ui.horizontal(|ui| {
                    ui.add_space((available_rect.width() - 100.0) / 2.0);
                    ui.label(egui::RichText::new("Cargando...").color(colors::GRAY_DARK));
                    ui.spinner();
                });
            }
        });
    });
}
