// Harness controls: deck reset, widget options, logs window.

use eframe::egui;

use super::logs_ui;
use super::state::DemoState;

pub fn draw_top_bar(ui: &mut egui::Ui, state: &mut DemoState) {
    ui.horizontal(|ui| {
        if ui.button("Reset deck").clicked() {
            state.reset_deck();
        }

        ui.menu_button("Options", |ui| {
            ui.set_min_width(220.0);

            let opts = &mut state.options;
            if ui
                .add(egui::Slider::new(&mut opts.max_stacked, 1..=5).text("Stacked cards"))
                .changed()
            {
                log::debug!("max_stacked set to {}", opts.max_stacked);
            }
            if ui.checkbox(&mut opts.volumetric, "Volumetric pack").changed() {
                log::debug!("volumetric set to {}", opts.volumetric);
            }
            if ui
                .checkbox(&mut opts.fade_stacked, "Fade stacked cards")
                .changed()
            {
                log::debug!("fade_stacked set to {}", opts.fade_stacked);
            }
        });

        if ui.button("Logs").clicked() {
            logs_ui::open_logs();
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(format!("{} cards", state.cards.len()));
        });
    });
}
