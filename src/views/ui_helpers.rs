use eframe::egui::Color32;

use crate::types::CardColor;

/// Applies a 0..1 opacity on top of a color's own alpha.
pub fn with_alpha(color: Color32, alpha: f32) -> Color32 {
    color.gamma_multiply(alpha.clamp(0.0, 1.0))
}

/// Scheme-adaptive chrome pair: (background, foreground).
/// Dark pill with light text on a light scheme, inverted on a dark scheme.
pub fn adaptive_pill_colors(dark_mode: bool) -> (Color32, Color32) {
    if dark_mode {
        (CardColor::Day.color32(), CardColor::Night.color32())
    } else {
        (CardColor::Night.color32(), CardColor::Day.color32())
    }
}
