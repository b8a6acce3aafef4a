use eframe::egui::{self, Color32, FontId, Rounding};

use crate::types::{Card, CardColor};
use crate::ui_constants::card;
use crate::views::ui_helpers::with_alpha;

/// Draws one card body: colored rounded fill with the title in the top
/// leading corner. `scale` shrinks the card toward its bottom edge in the
/// collapsed pack, so the paddings and the font scale along with it.
pub fn draw_card(painter: &egui::Painter, rect: egui::Rect, data: &Card, scale: f32, alpha: f32) {
    if alpha <= 0.0 {
        return;
    }

    let rounding = Rounding::same(card::ROUNDING * scale);
    painter.rect_filled(rect, rounding, with_alpha(data.color.color32(), alpha));

    // Title wraps clear of the trailing 42% of the card.
    let pad = card::TEXT_PADDING * scale;
    let wrap_w = (rect.width() * 0.58 - pad).max(0.0);
    let galley = painter.layout(
        data.title.clone(),
        FontId::proportional(card::TEXT_SIZE * scale),
        with_alpha(CardColor::Night.color32(), card::TEXT_OPACITY * alpha),
        wrap_w,
    );
    painter.galley(
        rect.left_top() + egui::vec2(pad, pad),
        galley,
        Color32::TRANSPARENT,
    );
}
