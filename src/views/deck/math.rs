// Pure layout math for the pack: scale/offset/alpha interpolation between
// the collapsed stack and the expanded list, plus the swipe release rules.
// Everything here is framework-free so it stays unit-testable.

use crate::ui_constants::{card, pack, swipe};

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Overshooting ease-out curve, the pack's "bouncy" spring.
/// Maps 0 -> 0 and 1 -> 1, peaking slightly above 1 on the way in.
pub fn ease_out_back(t: f32) -> f32 {
    const C1: f32 = 1.70158;
    const C3: f32 = C1 + 1.0;
    let u = t - 1.0;
    1.0 + C3 * u * u * u + C1 * u * u
}

/// Scale of the card at (fractional) depth `index`.
/// Collapsed: the top card sits at 1.1 in volumetric mode (1.0 otherwise)
/// and each depth step loses `SCALE_STEP`. Expanded: every card at 1.0.
pub fn card_scale(index: f32, expand_t: f32, volumetric: bool) -> f32 {
    let top = if volumetric { card::SPACING_FACTOR } else { 1.0 };
    let collapsed = (top - index * card::SCALE_STEP).max(0.0);
    lerp(collapsed, 1.0, expand_t)
}

/// Vertical offset of the card at (fractional) depth `index` from the top
/// of the pack rect. Depths at or past `max_stacked` park behind the top
/// card; they are invisible there, so the branch discontinuity never shows.
pub fn card_top_offset(index: f32, expand_t: f32, max_stacked: usize) -> f32 {
    let collapsed = if index < max_stacked as f32 {
        index * pack::TOP_STEP
    } else {
        0.0
    };
    let expanded = pack::EXPANDED_TOP_PADDING + index * card::HEIGHT_WITH_SPACING;
    lerp(collapsed, expanded, expand_t)
}

/// Opacity of the card at (fractional) depth `index`. Cards deeper than
/// `max_stacked` are hidden while collapsed and fade in with expansion.
/// Takes the linear progress, not the eased one, so alpha never overshoots.
pub fn card_alpha(index: f32, linear_t: f32, max_stacked: usize) -> f32 {
    let collapsed = (max_stacked as f32 - index).clamp(0.0, 1.0);
    lerp(collapsed, 1.0, linear_t).clamp(0.0, 1.0)
}

/// Height the widget claims from the layout.
/// Collapsed: one card plus the visible stack steps. Expanded: the less
/// button headroom plus the full list.
pub fn pack_height(cards: usize, expand_t: f32, max_stacked: usize) -> f32 {
    if cards == 0 {
        return 0.0;
    }
    let visible = cards.min(max_stacked.max(1));
    let collapsed = card::HEIGHT + (visible - 1) as f32 * pack::TOP_STEP;
    let expanded = pack::EXPANDED_TOP_PADDING
        + (cards - 1) as f32 * card::HEIGHT_WITH_SPACING
        + card::HEIGHT;
    lerp(collapsed, expanded, expand_t)
}

/// Drag distance past which releasing the swipe deletes the card.
pub fn delete_distance(content_width: f32) -> f32 {
    content_width * swipe::DELETE_DISTANCE_FACTOR
}

/// What a released swipe does, given the final offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Past the delete distance: remove the card.
    Delete,
    /// Past half the affordance width: settle revealed at -DELETION_WIDTH.
    Reveal,
    /// Anywhere else: snap back to zero.
    Settle,
}

pub fn release_outcome(offset_x: f32, content_width: f32) -> SwipeOutcome {
    if offset_x < -delete_distance(content_width) {
        SwipeOutcome::Delete
    } else if offset_x < -(swipe::DELETION_WIDTH * 0.5) {
        SwipeOutcome::Reveal
    } else {
        SwipeOutcome::Settle
    }
}

/// Arm/disarm edge detector for the impact tick. Returns the new armed
/// flag and whether the drag crossed the delete distance this step; staying
/// on one side of the threshold never reports an impact.
pub fn arm_transition(offset_x: f32, delete_distance: f32, armed: bool) -> (bool, bool) {
    if offset_x < -delete_distance && !armed {
        (true, true)
    } else if offset_x > -delete_distance && armed {
        (false, true)
    } else {
        (armed, false)
    }
}

/// Offset while dragging: the gesture translation on top of the settled
/// offset, but never to the right of the rest position at zero.
pub fn drag_offset(translation_x: f32, rest_offset_x: f32, previous: f32) -> f32 {
    let candidate = translation_x + rest_offset_x;
    if candidate <= 0.0 {
        candidate
    } else {
        previous
    }
}
