use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use eframe::egui::Color32;

/// Identity of a card, unique within the process lifetime.
/// Allocated from a monotonically increasing counter, so a deck can never
/// contain duplicate ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId(u64);

static NEXT_CARD_ID: AtomicU64 = AtomicU64::new(1);

impl CardId {
    pub fn next() -> Self {
        CardId(NEXT_CARD_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

/// Fixed palette used by the deck. The first five entries are card fills,
/// the rest are chrome colors (delete strip, text, overlays).
#[derive(strum::EnumIter, strum::Display, strum::EnumString, PartialEq, Eq, Clone, Copy, Debug)]
#[strum(serialize_all = "lowercase")]
pub enum CardColor {
    Venus,
    Theia,
    Candy,
    Coffee,
    NewYork,
    Cherry,
    Night,
    Day,
}

impl CardColor {
    pub fn color32(&self) -> Color32 {
        use CardColor::*;
        match self {
            Venus => Color32::from_rgb(242, 132, 130),
            Theia => Color32::from_rgb(132, 165, 243),
            Candy => Color32::from_rgb(247, 174, 208),
            Coffee => Color32::from_rgb(196, 164, 132),
            NewYork => Color32::from_rgb(242, 196, 90),
            Cherry => Color32::from_rgb(214, 69, 65),
            Night => Color32::from_rgb(22, 22, 24),
            Day => Color32::from_rgb(240, 240, 238),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown card color: {0}")]
pub struct CardColorError(String);

impl CardColor {
    /// Resolves a palette name ("venus", "coffee", ...) to a color.
    pub fn parse(name: &str) -> Result<Self, CardColorError> {
        CardColor::from_str(name).map_err(|_| CardColorError(name.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    pub color: CardColor,
}

impl Card {
    pub fn new(title: impl Into<String>, color: CardColor) -> Self {
        Self {
            id: CardId::next(),
            title: title.into(),
            color,
        }
    }

    /// The five preview cards shown by the demo harness. Colors are looked
    /// up by palette name; a bad name drops the card with a warning.
    pub fn sample_deck() -> Vec<Card> {
        ["venus", "theia", "candy", "coffee", "newyork"]
            .into_iter()
            .filter_map(|name| match CardColor::parse(name) {
                Ok(color) => Some(Card::new("Card", color)),
                Err(e) => {
                    log::warn!("sample deck: {e}");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn palette_names_round_trip() {
        for color in CardColor::iter() {
            let name = color.to_string();
            assert_eq!(CardColor::parse(&name), Ok(color), "name {name:?}");
        }
    }

    #[test]
    fn unknown_palette_name_is_an_error() {
        let err = CardColor::parse("mars").unwrap_err();
        assert_eq!(err.to_string(), "unknown card color: mars");
    }

    #[test]
    fn sample_deck_ids_are_unique() {
        let deck = Card::sample_deck();
        assert_eq!(deck.len(), 5);
        let ids: HashSet<_> = deck.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), deck.len());
    }
}
