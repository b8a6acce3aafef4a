use eframe::egui::{self, Sense, Vec2};

use crate::types::Card;
use crate::ui_constants::{card, pack, spacing};

use super::{items, math, DeckOptions, DeckResponse};

/// Draws the pack and handles all of its input for this frame.
///
/// Collapsed, the deck renders as a stack with `max_stacked` visible cards
/// and tapping the top card expands it into a vertical list. While expanded
/// (or when a single card remains) each card can be swiped away to the left.
/// An empty deck draws nothing and takes no space.
pub fn card_pack(ui: &mut egui::Ui, cards: &mut Vec<Card>, options: &DeckOptions) -> DeckResponse {
    let mut out = DeckResponse::default();
    if cards.is_empty() {
        return out;
    }

    let widget_id = ui.id().with("card_pack");
    let expanded_id = widget_id.with("expanded");
    let mut expanded = ui
        .ctx()
        .memory(|m| m.data.get_temp::<bool>(expanded_id))
        .unwrap_or(false);

    let linear_t =
        ui.ctx()
            .animate_bool_with_time(widget_id.with("expand_t"), expanded, pack::ANIM_TIME);
    let eased_t = math::ease_out_back(linear_t);

    let inset = if options.volumetric {
        pack::HORIZONTAL_PADDING
    } else {
        0.0
    };
    let avail = ui.available_width();
    let base_w = (avail - inset * 2.0).max(0.0);

    let height = math::pack_height(cards.len(), eased_t, options.max_stacked);
    let (pack_rect, _) = ui.allocate_exact_size(Vec2::new(avail, height), Sense::hover());

    // The top card overscales past the pack rect and swiped cards slide
    // out of it, so paint with a slightly expanded clip.
    let clip = pack_rect.expand2(Vec2::new(
        pack::HORIZONTAL_PADDING + spacing::MEDIUM,
        spacing::LARGE,
    ));
    let painter = ui.painter_at(clip);

    let n = cards.len();
    let swipe_enabled = expanded || n == 1;
    let mut delete_idx: Option<usize> = None;

    // Back to front so the top card is registered last and wins hit-testing.
    for index in (0..n).rev() {
        let card_data = &cards[index];

        // Smooth the depth itself so deletions reflow instead of snapping.
        let fi = ui.ctx().animate_value_with_time(
            widget_id.with(("depth", card_data.id.get())),
            index as f32,
            pack::REFLOW_TIME,
        );

        let scale = math::card_scale(fi, eased_t, options.volumetric);
        let y_off = math::card_top_offset(fi, eased_t, options.max_stacked);
        let alpha = math::card_alpha(fi, linear_t, options.max_stacked);

        // Bottom-center anchored scaling: the layout frame is
        // base_w x HEIGHT and the drawn rect shrinks toward its bottom edge.
        let bottom = pack_rect.top() + y_off + card::HEIGHT;
        let w = base_w * scale;
        let h = card::HEIGHT * scale;
        let cx = pack_rect.center().x;
        let rect = egui::Rect::from_min_max(
            egui::pos2(cx - w * 0.5, bottom - h),
            egui::pos2(cx + w * 0.5, bottom),
        );

        let swipe = items::swipe::swipe_to_delete(
            ui,
            &painter,
            card_data.id,
            rect,
            swipe_enabled,
            alpha,
        );

        let card_rect = rect.translate(Vec2::new(swipe.offset_x, 0.0));
        items::card::draw_card(&painter, card_rect, card_data, scale, alpha);
        if options.fade_stacked {
            items::pack_overlay::draw_fade_overlay(
                &painter,
                card_rect,
                scale,
                index,
                linear_t,
                options.max_stacked,
            );
        }

        out.impact |= swipe.impact;

        if swipe.delete {
            delete_idx = Some(index);
        } else if swipe.clicked {
            if expanded || n == 1 {
                out.tapped = Some(index);
            }
            if !expanded && index == 0 && n > 1 {
                expanded = true;
            }
        }
    }

    // "Show less" pill, drawn last so it stays on top of the list.
    if items::less_button::less_button(ui, &painter, pack_rect, linear_t) {
        expanded = false;
    }

    if let Some(index) = delete_idx {
        let removed = cards.remove(index);
        log::debug!("card {} removed by swipe", removed.id.get());
        // Deleting the last card collapses the pack.
        if expanded {
            expanded = !cards.is_empty();
        }
        out.deleted = Some(removed);
    }

    ui.ctx()
        .memory_mut(|m| m.data.insert_temp(expanded_id, expanded));
    out.expanded = expanded;
    out
}
