// The expandable card pack widget: a stack of colored cards that expands
// into a vertical list on tap, each card removable via swipe-to-delete.

mod items;
mod math;
mod render;
mod tests;

pub use render::card_pack;

use crate::ui_constants::PACK_MAX_STACKED;

/// Configuration surface of the pack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeckOptions {
    /// Cards visible in the collapsed stack; deeper cards are hidden.
    pub max_stacked: usize,
    /// Layering style: scale the top card above 1.0 and inset the pack so
    /// the lower cards peek out from behind it.
    pub volumetric: bool,
    /// Shade stacked cards with a neutral overlay so the collapsed pack
    /// reads as one deck instead of a fan of colors.
    pub fade_stacked: bool,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            max_stacked: PACK_MAX_STACKED,
            volumetric: true,
            fade_stacked: true,
        }
    }
}

/// Per-frame events reported by `card_pack` so the caller can react.
#[derive(Debug, Clone, Default)]
pub struct DeckResponse {
    /// Index of the card tapped this frame (expanded pack or single card).
    pub tapped: Option<usize>,
    /// Card removed by a completed swipe-to-delete this frame.
    pub deleted: Option<crate::types::Card>,
    /// Whether the pack is expanded after this frame's input.
    pub expanded: bool,
    /// True on the frame a swipe crosses (or re-crosses) the delete
    /// threshold. Desktop stand-in for the impact haptic.
    pub impact: bool,
}
