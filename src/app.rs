// App logic is kept out of main.rs: DeckApp owns the demo deck and the
// widget options and draws the harness UI around the pack itself
// (views::deck). Per-frame deck events are routed into the logger here.

use eframe::egui::RichText;
use eframe::{egui, App};

use crate::ui_constants::spacing;
use crate::views::deck;

mod controls;
mod logs_ui;
mod state;

use state::DemoState;

#[derive(Default)]
pub struct DeckApp {
    state: DemoState,
}

impl App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            controls::draw_top_bar(ui, &mut self.state);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(spacing::LARGE);

            let response = deck::card_pack(ui, &mut self.state.cards, &self.state.options);

            if let Some(index) = response.tapped {
                log::info!("card tapped: {index}");
                self.state.last_tapped = Some(index);
            }
            if response.impact {
                // Desktop stand-in for the impact haptic.
                log::debug!("impact: delete threshold crossed");
            }
            if let Some(card) = &response.deleted {
                log::info!("card {} deleted ({})", card.id.get(), card.color);
            }
            if response.expanded != self.state.expanded {
                self.state.expanded = response.expanded;
                log::info!(
                    "pack {}",
                    if response.expanded { "expanded" } else { "collapsed" }
                );
            }

            ui.add_space(spacing::LARGE);
            ui.label("Some content");
            if let Some(index) = self.state.last_tapped {
                ui.add_space(spacing::SMALL);
                ui.label(RichText::new(format!("Last tapped card: {index}")).weak());
            }
            if self.state.cards.is_empty() {
                ui.add_space(spacing::MEDIUM);
                ui.label(RichText::new("Deck is empty — use Reset deck.").weak());
            }
        });

        logs_ui::draw_logs_viewport(ctx);
    }
}
