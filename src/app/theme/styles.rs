//! Theme Styling Functions
//!
//! Helpers for applying the light color scheme consistently across
//! the UI.

use eframe::egui::{self, CornerRadius, Stroke};

use super::colors;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();

    // Window styling
    style.visuals.window_fill = colors::WHITE;
    style.visuals.window_stroke = Stroke::new(1.0, colors::GRAY_MEDIUM);

    // Panel styling
    style.visuals.panel_fill = colors::GRAY_LIGHT;

    // Widget styling
    style.visuals.widgets.noninteractive.bg_fill = colors::WHITE;
    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors::BLACK);

    style.visuals.widgets.inactive.bg_fill = colors::WHITE;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::BLACK);

    style.visuals.widgets.hovered.bg_fill = colors::GRAY_MEDIUM;
    style.visuals.widgets.active.bg_fill = colors::PRIMARY;

    // Selection color
    style.visuals.selection.bg_fill = colors::PRIMARY;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::WHITE);

    ctx.set_style(style);
}

/// Create a frame style for the top bar
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Create a frame style for white content cards
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::WHITE)
        .stroke(Stroke::new(1.0, colors::GRAY_MEDIUM))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(egui::Margin::same(16))
}

/// Create a frame style for list item cards
pub fn item_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::WHITE)
        .stroke(Stroke::new(1.0, colors::GRAY_MEDIUM))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(12, 8))
}
