/**
 * EventDesk Native Desktop App - Main Entry Point
 *
 * Implements eframe::App: polls worker results once per frame, then
 * renders the top bar and the phase-routed central panel.
 */
use eframe::egui;
use eventdesk::app::{theme, views, AppState};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "EventDesk",
        options,
        Box::new(|cc| {
            theme::styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(EventDeskApp::default()))
        }),
    )
}

/// Main application state
struct EventDeskApp {
    state: AppState,
}

impl Default for EventDeskApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl eframe::App for EventDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_workers();

        views::render_top_bar(ctx, &mut self.state);

        views::render_main_panel(ctx, &mut self.state);

        ctx.request_repaint();
    }
}
