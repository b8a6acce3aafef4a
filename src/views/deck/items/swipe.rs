use eframe::egui::{self, Align2, FontId, Rounding, Sense};

use crate::types::{CardColor, CardId};
use crate::ui_constants::{card, swipe};
use crate::views::deck::math::{self, SwipeOutcome};
use crate::views::ui_helpers::with_alpha;

/// Per-card gesture state, persisted in egui memory across frames.
#[derive(Clone, Copy, Default)]
struct SwipeState {
    /// Current horizontal translation, never positive.
    offset_x: f32,
    /// Settled offset: 0 or -DELETION_WIDTH when the affordance is revealed.
    rest_offset_x: f32,
    /// Drag has crossed the delete distance; edge detector for the impact tick.
    armed: bool,
    /// Accumulated gesture translation since the drag started.
    drag_x: f32,
    drag_y: f32,
}

pub struct SwipeOutput {
    /// Visual offset to apply to the card this frame.
    pub offset_x: f32,
    /// Delete decided this frame (full swipe or tap on the affordance).
    pub delete: bool,
    /// Crossed the delete threshold this frame, in either direction.
    pub impact: bool,
    /// Plain tap on the card surface.
    pub clicked: bool,
}

/// Handles the horizontal drag gesture for one card and draws the delete
/// affordance under its trailing edge. The card body itself is drawn by the
/// caller at the returned offset.
pub fn swipe_to_delete(
    ui: &mut egui::Ui,
    painter: &egui::Painter,
    card_id: CardId,
    rect: egui::Rect,
    enabled: bool,
    alpha: f32,
) -> SwipeOutput {
    let id = ui.id().with(("swipe", card_id.get()));
    let mut st = ui
        .ctx()
        .memory(|m| m.data.get_temp::<SwipeState>(id))
        .unwrap_or_default();

    let resp = ui.interact(rect, id.with("drag"), Sense::click_and_drag());
    let mut out = SwipeOutput {
        offset_x: 0.0,
        delete: false,
        impact: false,
        clicked: resp.clicked(),
    };
    let w = rect.width();

    if enabled {
        if resp.drag_started() {
            st.drag_x = 0.0;
            st.drag_y = 0.0;
        }
        if resp.dragged() {
            let delta = resp.drag_delta();
            st.drag_x += delta.x;
            st.drag_y += delta.y;

            // Ignore gestures that are more vertical than horizontal.
            if st.drag_x.abs() > st.drag_y.abs() {
                st.offset_x = math::drag_offset(st.drag_x, st.rest_offset_x, st.offset_x);
            }

            let (armed, impact) =
                math::arm_transition(st.offset_x, math::delete_distance(w), st.armed);
            st.armed = armed;
            out.impact = impact;
        }
        if resp.drag_stopped() {
            match math::release_outcome(st.offset_x, w) {
                SwipeOutcome::Delete => {
                    st.offset_x = -w * 3.0;
                    out.delete = true;
                }
                SwipeOutcome::Reveal => {
                    st.offset_x = -swipe::DELETION_WIDTH;
                    st.rest_offset_x = -swipe::DELETION_WIDTH;
                }
                SwipeOutcome::Settle => {
                    st.offset_x = 0.0;
                    st.rest_offset_x = 0.0;
                }
            }
            st.armed = false;
        }
    } else if st.offset_x != 0.0 || st.rest_offset_x != 0.0 {
        // Swiping got disabled (pack collapsed) with a revealed affordance:
        // tuck it back in.
        st.offset_x = 0.0;
        st.rest_offset_x = 0.0;
        st.armed = false;
    }

    // Track the pointer exactly while dragging, settle smoothly afterwards.
    let anim_time = if resp.dragged() { 0.0 } else { swipe::SETTLE_TIME };
    let visual = ui
        .ctx()
        .animate_value_with_time(id.with("offset"), st.offset_x, anim_time);
    out.offset_x = visual;

    if visual < -0.5 {
        draw_affordance(painter, rect, visual, alpha);

        // Tap on the revealed strip deletes as well.
        if resp.clicked() {
            if let Some(pos) = resp.interact_pointer_pos() {
                if pos.x > rect.right() + visual {
                    out.delete = true;
                    out.clicked = false;
                }
            }
        }
    }

    if out.delete {
        ui.ctx().memory_mut(|m| m.data.remove::<SwipeState>(id));
    } else {
        ui.ctx().memory_mut(|m| m.data.insert_temp(id, st));
    }
    out
}

/// Cherry strip with a trash glyph, revealed as the card slides left.
/// The strip's left edge hides under the card's rounded trailing corner.
fn draw_affordance(painter: &egui::Painter, rect: egui::Rect, offset_x: f32, alpha: f32) {
    let strip = egui::Rect::from_min_max(
        egui::pos2(rect.right() - card::ROUNDING + offset_x, rect.top()),
        egui::pos2(rect.right(), rect.bottom()),
    );
    painter.rect_filled(
        strip,
        Rounding::same(card::ROUNDING),
        with_alpha(CardColor::Cherry.color32(), alpha),
    );

    painter.text(
        egui::pos2(strip.center().x + card::ROUNDING * 0.5, strip.center().y),
        Align2::CENTER_CENTER,
        "🗑",
        FontId::proportional(card::HEIGHT * swipe::TRASH_HEIGHT_FACTOR),
        with_alpha(CardColor::Night.color32(), swipe::TRASH_OPACITY * alpha),
    );
}
