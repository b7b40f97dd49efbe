//! Full-screen panels for the loading and error states

use egui::{RichText, Ui};

use crate::theme::error_color;

pub const DASHBOARD_TITLE: &str = "USGS Earthquake Data Dashboard";

/// Centered heading above the dashboard panels
pub fn dashboard_heading(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.heading(RichText::new(DASHBOARD_TITLE).strong());
    });
    ui.add_space(8.0);
}

/// Placeholder while the record source is loading
pub fn loading_panel(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.4);
        ui.spinner();
        ui.add_space(8.0);
        ui.label(RichText::new("Loading Geographic Data...").size(20.0).strong());
    });
}

/// Terminal error message; there is no retry
pub fn error_panel(ui: &mut Ui, message: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.4);
        ui.label(
            RichText::new(format!("Error: {}", message))
                .color(error_color())
                .strong(),
        );
    });
}
