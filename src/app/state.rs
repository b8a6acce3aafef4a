// Demo state extracted from app.rs to keep the update loop small.

use crate::types::Card;
use crate::views::deck::DeckOptions;

pub struct DemoState {
    pub cards: Vec<Card>,
    pub options: DeckOptions,
    pub last_tapped: Option<usize>,
    /// Pack state as of the previous frame, for transition logging.
    pub expanded: bool,
}

impl Default for DemoState {
    fn default() -> Self {
        Self {
            cards: Card::sample_deck(),
            options: DeckOptions::default(),
            last_tapped: None,
            expanded: false,
        }
    }
}

impl DemoState {
    /// Restores the five sample cards so the demo stays usable after the
    /// whole deck has been swiped away.
    pub fn reset_deck(&mut self) {
        self.cards = Card::sample_deck();
        self.last_tapped = None;
        log::info!("demo deck reset to {} cards", self.cards.len());
    }
}
