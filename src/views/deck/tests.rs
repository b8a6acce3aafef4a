#[cfg(test)]
mod tests {
    use crate::views::deck::math::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn ease_out_back_hits_both_endpoints() {
        assert!(close(ease_out_back(0.0), 0.0));
        assert!(close(ease_out_back(1.0), 1.0));
    }

    #[test]
    fn ease_out_back_overshoots_on_the_way_in() {
        // The bounce: somewhere past the midpoint the curve exceeds 1.
        let peak = (0..=100)
            .map(|i| ease_out_back(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0, "peak was {peak}");
    }

    #[test]
    fn collapsed_scale_steps_down_with_depth() {
        assert!(close(card_scale(0.0, 0.0, true), 1.1));
        assert!(close(card_scale(1.0, 0.0, true), 1.04));
        assert!(close(card_scale(2.0, 0.0, true), 0.98));
        // Flat pack starts at 1.0 instead.
        assert!(close(card_scale(0.0, 0.0, false), 1.0));
        assert!(close(card_scale(1.0, 0.0, false), 0.94));
    }

    #[test]
    fn expanded_scale_is_uniform() {
        for i in 0..5 {
            assert!(close(card_scale(i as f32, 1.0, true), 1.0));
            assert!(close(card_scale(i as f32, 1.0, false), 1.0));
        }
    }

    #[test]
    fn collapsed_offsets_step_until_max_stacked() {
        assert!(close(card_top_offset(0.0, 0.0, 3), 0.0));
        assert!(close(card_top_offset(1.0, 0.0, 3), 9.0));
        assert!(close(card_top_offset(2.0, 0.0, 3), 18.0));
        // Hidden depths park behind the top card.
        assert!(close(card_top_offset(3.0, 0.0, 3), 0.0));
        assert!(close(card_top_offset(4.0, 0.0, 3), 0.0));
    }

    #[test]
    fn expanded_offsets_form_the_list() {
        assert!(close(card_top_offset(0.0, 1.0, 3), 50.0));
        assert!(close(card_top_offset(1.0, 1.0, 3), 160.0));
        assert!(close(card_top_offset(2.0, 1.0, 3), 270.0));
    }

    #[test]
    fn offsets_interpolate_between_the_endpoints() {
        let a = card_top_offset(1.0, 0.0, 3);
        let b = card_top_offset(1.0, 1.0, 3);
        let mid = card_top_offset(1.0, 0.5, 3);
        assert!(close(mid, (a + b) * 0.5));
    }

    #[test]
    fn hidden_depths_fade_in_with_expansion() {
        assert!(close(card_alpha(0.0, 0.0, 3), 1.0));
        assert!(close(card_alpha(2.0, 0.0, 3), 1.0));
        assert!(close(card_alpha(3.0, 0.0, 3), 0.0));
        // Fractional depth during a reflow fades smoothly.
        assert!(close(card_alpha(2.5, 0.0, 3), 0.5));
        // Fully expanded everything is visible.
        assert!(close(card_alpha(4.0, 1.0, 3), 1.0));
        // Overshooting progress never pushes alpha past 1.
        assert!(card_alpha(0.0, 1.2, 3) <= 1.0);
    }

    #[test]
    fn pack_height_at_both_endpoints() {
        // 5 cards, 3 stacked: 100 + 2 * 9 collapsed.
        assert!(close(pack_height(5, 0.0, 3), 118.0));
        // Expanded: 50 headroom + 4 * 110 rows + the last card.
        assert!(close(pack_height(5, 1.0, 3), 590.0));
        // A single card has no stack steps.
        assert!(close(pack_height(1, 0.0, 3), 100.0));
        assert!(close(pack_height(0, 0.7, 3), 0.0));
    }

    #[test]
    fn release_past_delete_distance_deletes() {
        let w = 300.0;
        assert_eq!(release_outcome(-241.0, w), SwipeOutcome::Delete);
        assert_eq!(release_outcome(-2.0 * w, w), SwipeOutcome::Delete);
    }

    #[test]
    fn release_past_half_affordance_reveals() {
        let w = 300.0;
        assert_eq!(release_outcome(-240.0, w), SwipeOutcome::Reveal);
        assert_eq!(release_outcome(-80.0, w), SwipeOutcome::Reveal);
        assert_eq!(release_outcome(-41.0, w), SwipeOutcome::Reveal);
    }

    #[test]
    fn release_short_drags_snap_back() {
        let w = 300.0;
        assert_eq!(release_outcome(-40.0, w), SwipeOutcome::Settle);
        assert_eq!(release_outcome(-1.0, w), SwipeOutcome::Settle);
        assert_eq!(release_outcome(0.0, w), SwipeOutcome::Settle);
    }

    #[test]
    fn crossing_the_delete_distance_arms_and_ticks_once() {
        let dd = 240.0;
        // Crossing in arms and reports one impact.
        assert_eq!(arm_transition(-241.0, dd, false), (true, true));
        // Staying past the threshold stays armed and stays silent.
        assert_eq!(arm_transition(-300.0, dd, true), (true, false));
        // Re-crossing back disarms with a second impact.
        assert_eq!(arm_transition(-239.0, dd, true), (false, true));
        // Short drags on the near side never tick.
        assert_eq!(arm_transition(-10.0, dd, false), (false, false));
        assert_eq!(arm_transition(-239.0, dd, false), (false, false));
    }

    #[test]
    fn drag_offset_only_moves_left() {
        // Free drag to the left from rest.
        assert!(close(drag_offset(-50.0, 0.0, 0.0), -50.0));
        // Rightward drags past the rest position keep the previous offset.
        assert!(close(drag_offset(30.0, 0.0, -10.0), -10.0));
        // From the revealed rest position a small right drag still works.
        assert!(close(drag_offset(30.0, -80.0, -80.0), -50.0));
    }
}
