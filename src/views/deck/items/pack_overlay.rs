use eframe::egui::{self, Rounding};

use crate::types::CardColor;
use crate::ui_constants::{card, pack};
use crate::views::ui_helpers::with_alpha;

/// Neutral shading over the stacked cards: a light base coat plus a dark
/// tint that deepens with depth, so the collapsed pack reads as one deck
/// instead of a fan of colors. Fades out as the pack expands.
pub fn draw_fade_overlay(
    painter: &egui::Painter,
    rect: egui::Rect,
    scale: f32,
    index: usize,
    linear_t: f32,
    max_stacked: usize,
) {
    if index == 0 || index >= max_stacked {
        return;
    }
    let fade = (1.0 - linear_t).clamp(0.0, 1.0);
    if fade <= 0.0 {
        return;
    }

    let rounding = Rounding::same(card::ROUNDING * scale);
    painter.rect_filled(rect, rounding, with_alpha(CardColor::Day.color32(), fade));
    painter.rect_filled(
        rect,
        rounding,
        with_alpha(
            CardColor::Night.color32(),
            (index as f32 * pack::FADE_STEP).min(1.0) * fade,
        ),
    );
}
