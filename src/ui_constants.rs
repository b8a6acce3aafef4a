// UI constants extracted from scattered magic numbers across the codebase.
// Clean Code principle: Replace Magic Numbers with Named Constants.

/// Default number of cards visible in the collapsed pack
pub const PACK_MAX_STACKED: usize = 3;

/// UI spacing constants
pub mod spacing {
    /// Small spacing (4px)
    pub const SMALL: f32 = 4.0;

    /// Medium spacing (8px)
    pub const MEDIUM: f32 = 8.0;

    /// Large spacing (16px)
    pub const LARGE: f32 = 16.0;
}

/// Card layout constants
pub mod card {
    /// Card height in logical pixels
    pub const HEIGHT: f32 = 100.0;

    /// Spacing factor between expanded cards (height * factor per row)
    pub const SPACING_FACTOR: f32 = 1.1;

    /// Card height including the inter-card gap in the expanded list
    pub const HEIGHT_WITH_SPACING: f32 = HEIGHT * SPACING_FACTOR;

    /// Scale lost per depth step in the collapsed pack
    pub const SCALE_STEP: f32 = 0.06;

    /// Border radius of card corners
    pub const ROUNDING: f32 = 16.0;

    /// Title font size
    pub const TEXT_SIZE: f32 = 28.0;

    /// Title opacity
    pub const TEXT_OPACITY: f32 = 0.8;

    /// Inner padding for the title (leading/top)
    pub const TEXT_PADDING: f32 = 16.0;
}

/// Collapsed/expanded pack layout constants
pub mod pack {
    /// Vertical offset per depth step while collapsed
    pub const TOP_STEP: f32 = 9.0;

    /// Top padding above the list while expanded (room for the less button)
    pub const EXPANDED_TOP_PADDING: f32 = 50.0;

    /// Horizontal inset of the whole pack in volumetric mode
    pub const HORIZONTAL_PADDING: f32 = 18.0;

    /// Dark tint gained per depth step by the stacked-card fade overlay
    pub const FADE_STEP: f32 = 0.18;

    /// Expand/collapse animation time in seconds
    pub const ANIM_TIME: f32 = 0.35;

    /// Per-card reflow smoothing time in seconds (deletions)
    pub const REFLOW_TIME: f32 = 0.12;
}

/// "Show less" pill constants
pub mod less_button {
    /// Pill size
    pub const WIDTH: f32 = 125.0;
    pub const HEIGHT: f32 = 38.0;

    /// Pill opacity
    pub const OPACITY: f32 = 0.8;

    /// Label font size
    pub const FONT_SIZE: f32 = 17.0;

    /// Chevron glyph size
    pub const CHEVRON_WIDTH: f32 = 16.0;
    pub const CHEVRON_HEIGHT: f32 = 9.0;
}

/// Swipe-to-delete constants
pub mod swipe {
    /// Width of the revealed delete affordance
    pub const DELETION_WIDTH: f32 = 80.0;

    /// Fraction of the card width the drag must cover to delete outright
    pub const DELETE_DISTANCE_FACTOR: f32 = 0.8;

    /// Trash glyph height as a fraction of the card height
    pub const TRASH_HEIGHT_FACTOR: f32 = 0.25;

    /// Trash glyph opacity
    pub const TRASH_OPACITY: f32 = 0.8;

    /// Settle animation time in seconds (snap back / reveal)
    pub const SETTLE_TIME: f32 = 0.15;
}
