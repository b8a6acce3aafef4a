use eframe::egui::{self, FontId, Rounding, Sense, Stroke};

use crate::ui_constants::{card, less_button, spacing};
use crate::views::ui_helpers::{adaptive_pill_colors, with_alpha};

/// "Show less" pill in the pack's top-right corner while expanded.
/// Fades and slides in with the expansion progress; returns true on click.
pub fn less_button(
    ui: &mut egui::Ui,
    painter: &egui::Painter,
    pack_rect: egui::Rect,
    linear_t: f32,
) -> bool {
    if linear_t <= 0.0 {
        return false;
    }

    // Slide up from below while appearing.
    let slide = (1.0 - linear_t) * 20.0;
    let rect = egui::Rect::from_min_size(
        egui::pos2(
            pack_rect.right() - less_button::WIDTH,
            pack_rect.top() + slide,
        ),
        egui::vec2(less_button::WIDTH, less_button::HEIGHT),
    );

    let resp = ui
        .interact(rect, ui.id().with("less_button"), Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);

    let (bg, fg) = adaptive_pill_colors(ui.visuals().dark_mode);
    painter.rect_filled(
        rect,
        Rounding::same(card::ROUNDING),
        with_alpha(bg, less_button::OPACITY * linear_t),
    );

    let fg = with_alpha(fg, linear_t);
    let galley = painter.layout_no_wrap(
        "Show less".to_string(),
        FontId::proportional(less_button::FONT_SIZE),
        fg,
    );

    // Chevron and label as one centered row.
    let total_w = less_button::CHEVRON_WIDTH + spacing::MEDIUM + galley.rect.width();
    let left = rect.center().x - total_w * 0.5;
    let cy = rect.center().y;

    let apex = egui::pos2(
        left + less_button::CHEVRON_WIDTH * 0.5,
        cy - less_button::CHEVRON_HEIGHT * 0.5,
    );
    let base_y = cy + less_button::CHEVRON_HEIGHT * 0.5;
    let stroke = Stroke::new(2.0, fg);
    painter.line_segment([egui::pos2(left, base_y), apex], stroke);
    painter.line_segment(
        [apex, egui::pos2(left + less_button::CHEVRON_WIDTH, base_y)],
        stroke,
    );

    painter.galley(
        egui::pos2(
            left + less_button::CHEVRON_WIDTH + spacing::MEDIUM,
            cy - galley.rect.height() * 0.5,
        ),
        galley,
        fg,
    );

    resp.clicked()
}
